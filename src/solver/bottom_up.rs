// src/solver/bottom_up.rs

use crate::model::{CostParams, TieBreak};
use crate::solver::bellman::{best_choice, Choice};
use crate::solver::traits::DecisionPolicy;
use log::debug;

/// Tabulation over the full `(day, stock)` grid, filled backward from the horizon.
///
/// Tables are flat, row-major by day: `values` has `T + 1` rows, `orders`
/// has `T` rows, each row `Smax + 1` wide. Work is `O(T * Smax * Qmax)`.
#[derive(Debug, Clone)]
pub struct BottomUpSolver {
    params: CostParams,
    horizon: usize,
    width: usize,
    values: Vec<u64>,
    orders: Vec<u32>,
}

impl BottomUpSolver {
    /// Builds and completely fills both tables.
    pub fn new(demand: &[u32], params: CostParams, tie_break: TieBreak) -> Self {
        let horizon = demand.len();
        let width = params.stock_levels();

        // Last row stays zero: V(T, s) = 0.
        let mut values = vec![0u64; (horizon + 1) * width];
        let mut orders = vec![0u32; horizon * width];

        for day in (0..horizon).rev() {
            let (current, next) = values[day * width..].split_at_mut(width);
            let next = &next[..width];

            for stock in 0..width {
                let choice = best_choice(stock as u32, demand[day], &params, tie_break, |s| {
                    next[s as usize]
                });
                current[stock] = choice.cost;
                orders[day * width + stock] = choice.order;
            }
        }

        debug!(
            "bottom-up: filled {} value cells over {} days x {} stock levels",
            values.len(),
            horizon,
            width
        );

        Self {
            params,
            horizon,
            width,
            values,
            orders,
        }
    }

    /// `V(day, stock)` and the order achieving it. `day == T` gives the boundary.
    pub fn choice(&self, day: usize, stock: u32) -> Choice {
        if day >= self.horizon {
            return Choice::TERMINAL;
        }
        let idx = day * self.width + stock.min(self.params.max_stock) as usize;
        Choice {
            cost: self.values[idx],
            order: self.orders[idx],
        }
    }

    /// Cells in the value table, boundary row included.
    pub fn cells_filled(&self) -> usize {
        self.values.len()
    }
}

impl DecisionPolicy for BottomUpSolver {
    fn best_order(&mut self, day: usize, stock: u32) -> u32 {
        self.choice(day, stock).order
    }

    fn value(&mut self, day: usize, stock: u32) -> u64 {
        self.choice(day, stock).cost
    }
}
