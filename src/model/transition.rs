// src/model/transition.rs

use crate::model::params::CostParams;

/// Outcome of one day: what happens to stock `s` after ordering `q` and
/// facing demand `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Stock after the order arrives, capped at `Smax`.
    pub replenished: u32,
    /// Demand that could not be served.
    pub shortage: u32,
    /// Stock carried into the next day.
    pub next_stock: u32,
    /// `c*q + h*next_stock + p*shortage`.
    pub cost: u64,
}

/// The cost and transition model for a single day.
///
/// Precondition: `stock <= params.max_stock`. Callers clamp before calling;
/// the bottom-up solver uses `stock` directly as a table index.
///
/// Units ordered beyond capacity are still paid for.
pub fn transition(stock: u32, order: u32, demand: u32, params: &CostParams) -> Step {
    debug_assert!(stock <= params.max_stock, "stock {stock} above Smax");

    let replenished = stock.saturating_add(order).min(params.max_stock);
    let shortage = demand.saturating_sub(replenished);
    let next_stock = replenished.saturating_sub(demand);

    let cost = (u64::from(params.purchase_cost) * u64::from(order))
        .saturating_add(u64::from(params.holding_cost) * u64::from(next_stock))
        .saturating_add(u64::from(params.shortage_penalty) * u64::from(shortage));

    Step {
        replenished,
        shortage,
        next_stock,
        cost,
    }
}
