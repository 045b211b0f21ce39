//! Daily replenishment of a consumable inventory, planned as a
//! finite-horizon dynamic program over `(day, stock)` states.
//!
//! The same value function is solved twice, by backward tabulation and by
//! memoized search, and the two answers are cross-checked:
//!
//! ```
//! use replenishment_dp::{solve, verify, CostParams, SolverKind, TieBreak};
//!
//! let params = CostParams::new(1, 1, 4, 20, 20).unwrap();
//! let demand = [10, 0, 5];
//! let bu = solve(SolverKind::BottomUp, &demand, 0, &params, TieBreak::LowestOrder).unwrap();
//! let td = solve(SolverKind::TopDown, &demand, 0, &params, TieBreak::LowestOrder).unwrap();
//! assert_eq!(bu.total_cost, 15);
//! assert_eq!(bu.orders, vec![10, 0, 5]);
//! assert!(verify::solutions_agree(&bu, &td));
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod solver;

pub use config::PlannerConfig;
pub use error::PlanError;
pub use model::{transition, CostParams, Step, TieBreak};
pub use solver::{solve, verify, SolveResult, SolverKind};
