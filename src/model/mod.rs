pub mod params;
pub mod transition;

pub use params::{CostParams, TieBreak};
pub use transition::{transition, Step};
