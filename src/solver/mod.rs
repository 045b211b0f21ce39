//! Replenishment planning as a finite-horizon dynamic program.
//!
//! Two solvers compute the same value function `V(t, s)`:
//! [`bottom_up::BottomUpSolver`] fills the whole table backward in time,
//! [`top_down::TopDownSolver`] resolves only the states a query reaches.
//! Both feed [`reconstruct::replay`] and can be cross-checked with
//! [`verify::compare`].

pub mod bellman;
pub mod bottom_up;
pub mod reconstruct;
pub mod top_down;
pub mod traits;
pub mod verify;

use crate::error::PlanError;
use crate::model::{CostParams, TieBreak};
use crate::solver::bottom_up::BottomUpSolver;
use crate::solver::reconstruct::{replay, DayPlan};
use crate::solver::top_down::TopDownSolver;
use crate::solver::traits::DecisionPolicy;
use log::{debug, warn};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    BottomUp,
    TopDown,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::BottomUp => write!(f, "bottom-up"),
            SolverKind::TopDown => write!(f, "top-down"),
        }
    }
}

/// Everything one solve produces. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub solver: SolverKind,
    /// `V(0, s_0)`
    pub total_cost: u64,
    /// Length `T`.
    pub orders: Vec<u32>,
    /// Length `T + 1`, starting with the clamped initial stock.
    pub trajectory: Vec<u32>,
    pub days: Vec<DayPlan>,
    /// Table cells filled (bottom-up) or states cached (top-down).
    pub states_evaluated: usize,
}

/// Validates the request, clamps the initial stock and runs one solver.
///
/// # Arguments
/// * `kind` - Which solver to run.
/// * `demand` - Known demand per day; its length is the horizon `T`.
/// * `initial_stock` - Opening stock, clamped into `[0, Smax]`.
/// * `params` - Cost and discretization parameters.
/// * `tie_break` - Rule for equal-cost orders.
pub fn solve(
    kind: SolverKind,
    demand: &[u32],
    initial_stock: i64,
    params: &CostParams,
    tie_break: TieBreak,
) -> Result<SolveResult, PlanError> {
    params.check_state_space(demand.len())?;

    let start = params.clamp_stock(initial_stock);
    if i64::from(start) != initial_stock {
        warn!(
            "initial stock {} outside [0, {}], clamped to {}",
            initial_stock, params.max_stock, start
        );
    }
    debug!(
        "{} solve: horizon {}, stock levels {}, order choices {}",
        kind,
        demand.len(),
        params.stock_levels(),
        params.max_order as u64 + 1
    );

    let result = match kind {
        SolverKind::BottomUp => {
            let mut solver = BottomUpSolver::new(demand, *params, tie_break);
            let states = solver.cells_filled();
            finish(kind, &mut solver, demand, start, params, states)
        }
        SolverKind::TopDown => {
            let mut solver = TopDownSolver::new(demand, *params, tie_break);
            let mut result = finish(kind, &mut solver, demand, start, params, 0);
            result.states_evaluated = solver.cached_states();
            result
        }
    };

    Ok(result)
}

fn finish<P: DecisionPolicy>(
    kind: SolverKind,
    policy: &mut P,
    demand: &[u32],
    start: u32,
    params: &CostParams,
    states_evaluated: usize,
) -> SolveResult {
    let total_cost = policy.value(0, start);
    let plan = replay(policy, demand, start, params);

    SolveResult {
        solver: kind,
        total_cost,
        orders: plan.orders,
        trajectory: plan.trajectory,
        days: plan.days,
        states_evaluated,
    }
}
