// src/solver/reconstruct.rs

use crate::model::{transition, CostParams};
use crate::solver::traits::DecisionPolicy;
use serde::Serialize;

/// One row of a replayed plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub day: usize,
    pub demand: u32,
    pub opening_stock: u32,
    pub order: u32,
    pub replenished: u32,
    pub shortage: u32,
    pub closing_stock: u32,
    pub cost: u64,
}

/// Output of a forward replay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Replay {
    /// `q_0 .. q_{T-1}`
    pub orders: Vec<u32>,
    /// `s_0 .. s_T`, initial stock first.
    pub trajectory: Vec<u32>,
    pub days: Vec<DayPlan>,
}

/// Walks the policy forward from `initial_stock` for exactly `demand.len()` days.
///
/// `initial_stock` is clamped into `[0, Smax]` before the first lookup.
pub fn replay<P>(policy: &mut P, demand: &[u32], initial_stock: u32, params: &CostParams) -> Replay
where
    P: DecisionPolicy + ?Sized,
{
    let horizon = demand.len();
    let mut stock = initial_stock.min(params.max_stock);

    let mut out = Replay {
        orders: Vec::with_capacity(horizon),
        trajectory: Vec::with_capacity(horizon + 1),
        days: Vec::with_capacity(horizon),
    };
    out.trajectory.push(stock);

    for (day, &day_demand) in demand.iter().enumerate() {
        let order = policy.best_order(day, stock);
        let step = transition(stock, order, day_demand, params);

        out.orders.push(order);
        out.trajectory.push(step.next_stock);
        out.days.push(DayPlan {
            day,
            demand: day_demand,
            opening_stock: stock,
            order,
            replenished: step.replenished,
            shortage: step.shortage,
            closing_stock: step.next_stock,
            cost: step.cost,
        });

        stock = step.next_stock;
    }

    out
}
