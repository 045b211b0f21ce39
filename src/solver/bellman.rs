// src/solver/bellman.rs

use crate::model::{transition, CostParams, TieBreak};

/// Value and argmin at one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub cost: u64,
    pub order: u32,
}

impl Choice {
    /// Boundary condition `V(T, s) = 0`; the order is meaningless there.
    pub const TERMINAL: Choice = Choice { cost: 0, order: 0 };
}

/// One application of the Bellman recurrence:
/// `min over q in [0, Qmax] of cost(s, q, d) + V(t + 1, s_next)`.
///
/// `continuation` returns `V(t + 1, s_next)`. Candidates are visited in
/// ascending `q` and `tie_break` decides which of several minimizers wins.
pub fn best_choice<F>(
    stock: u32,
    demand: u32,
    params: &CostParams,
    tie_break: TieBreak,
    mut continuation: F,
) -> Choice
where
    F: FnMut(u32) -> u64,
{
    let mut best = Choice {
        cost: u64::MAX,
        order: 0,
    };

    for order in 0..=params.max_order {
        let step = transition(stock, order, demand, params);
        let total = step.cost.saturating_add(continuation(step.next_stock));
        if order == 0 || tie_break.prefers(total, best.cost) {
            best = Choice { cost: total, order };
        }
    }

    best
}
