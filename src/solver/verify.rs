// src/solver/verify.rs

use crate::solver::SolveResult;
use log::warn;
use thiserror::Error;

/// Where and how two solve results part ways.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{left} and {right} disagree: cost {left_cost} vs {right_cost}, day {first_divergent_day:?}"
)]
pub struct Divergence {
    pub left: String,
    pub right: String,
    pub left_cost: u64,
    pub right_cost: u64,
    /// First day whose order differs, or the length of the shorter plan when
    /// one is a prefix of the other. `None` when only the cost differs.
    pub first_divergent_day: Option<usize>,
}

/// True iff total cost and every order in the plan are identical.
pub fn solutions_agree(left: &SolveResult, right: &SolveResult) -> bool {
    left.total_cost == right.total_cost && left.orders == right.orders
}

/// Like [`solutions_agree`] but returns the details of a mismatch.
///
/// A mismatch means one solver is wrong. It is logged here and must not be
/// resolved by trusting either side.
pub fn compare(left: &SolveResult, right: &SolveResult) -> Result<(), Divergence> {
    if solutions_agree(left, right) {
        return Ok(());
    }

    let first_divergent_day = left
        .orders
        .iter()
        .zip(&right.orders)
        .position(|(a, b)| a != b)
        .or_else(|| {
            (left.orders.len() != right.orders.len())
                .then(|| left.orders.len().min(right.orders.len()))
        });

    let divergence = Divergence {
        left: left.solver.to_string(),
        right: right.solver.to_string(),
        left_cost: left.total_cost,
        right_cost: right.total_cost,
        first_divergent_day,
    };
    warn!("{divergence}");
    Err(divergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverKind;

    fn result(solver: SolverKind, total_cost: u64, orders: Vec<u32>) -> SolveResult {
        let trajectory = vec![0; orders.len() + 1];
        SolveResult {
            solver,
            total_cost,
            orders,
            trajectory,
            days: Vec::new(),
            states_evaluated: 0,
        }
    }

    #[test]
    fn identical_results_agree() {
        let a = result(SolverKind::BottomUp, 15, vec![10, 0, 5]);
        let b = result(SolverKind::TopDown, 15, vec![10, 0, 5]);
        assert!(solutions_agree(&a, &b));
        assert!(compare(&a, &b).is_ok());
    }

    #[test]
    fn cost_mismatch_is_reported() {
        let a = result(SolverKind::BottomUp, 15, vec![10, 0, 5]);
        let b = result(SolverKind::TopDown, 16, vec![10, 0, 5]);
        let err = compare(&a, &b).unwrap_err();
        assert_eq!(err.first_divergent_day, None);
        assert_eq!((err.left_cost, err.right_cost), (15, 16));
    }

    #[test]
    fn order_mismatch_points_at_day() {
        let a = result(SolverKind::BottomUp, 15, vec![10, 0, 5]);
        let b = result(SolverKind::TopDown, 15, vec![10, 5, 0]);
        assert!(!solutions_agree(&a, &b));
        assert_eq!(compare(&a, &b).unwrap_err().first_divergent_day, Some(1));
    }

    #[test]
    fn length_mismatch_points_past_prefix() {
        let a = result(SolverKind::BottomUp, 15, vec![10, 0]);
        let b = result(SolverKind::TopDown, 15, vec![10, 0, 5]);
        assert_eq!(compare(&a, &b).unwrap_err().first_divergent_day, Some(2));
    }
}
