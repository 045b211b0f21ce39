// src/solver/traits.rs

use std::fmt::Debug;

/// Answers "which order does the optimal policy place at this state".
///
/// Implemented by both solvers so the forward replay in
/// [`crate::solver::reconstruct`] does not care whether the answer comes from
/// a finished table or from an on-demand search.
///
/// `&mut self` lets lazy implementations grow their cache while answering.
pub trait DecisionPolicy: Debug {
    /// Optimal order quantity for state `(day, stock)`.
    ///
    /// # Arguments
    /// * `day` - Day index, must be `< T`.
    /// * `stock` - Opening stock, already clamped into `[0, Smax]`.
    fn best_order(&mut self, day: usize, stock: u32) -> u32;

    /// Minimal remaining cost from `(day, stock)`. Zero when `day == T`.
    fn value(&mut self, day: usize, stock: u32) -> u64;
}
