// src/model/params.rs

use crate::error::{PlanError, MAX_STATE_CELLS};
use serde::{Deserialize, Serialize};

/// How to pick between order quantities that reach the same minimal cost.
///
/// Both solvers go through [`TieBreak::prefers`], so they agree on the
/// chosen order whichever rule is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First minimizer in ascending order quantity (strict `<`).
    #[default]
    LowestOrder,
    /// Last minimizer in ascending order quantity (`<=`). Ends the day with more stock.
    HighestOrder,
}

impl TieBreak {
    /// Returns true when `candidate` should replace `incumbent`.
    /// Candidates are always visited in ascending order quantity.
    pub fn prefers(self, candidate: u64, incumbent: u64) -> bool {
        match self {
            TieBreak::LowestOrder => candidate < incumbent,
            TieBreak::HighestOrder => candidate <= incumbent,
        }
    }
}

/// Immutable cost and discretization parameters for one solve.
///
/// # Fields
/// * `purchase_cost` - `c`, charged per unit ordered.
/// * `holding_cost` - `h`, charged per unit left at the end of the day.
/// * `shortage_penalty` - `p`, charged per unit of unmet demand.
/// * `max_order` - `Qmax`, largest order allowed on any day.
/// * `max_stock` - `Smax`, largest representable stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostParams {
    pub purchase_cost: u32,
    pub holding_cost: u32,
    pub shortage_penalty: u32,
    pub max_order: u32,
    pub max_stock: u32,
}

fn non_negative(name: &'static str, value: i64) -> Result<u32, PlanError> {
    if value < 0 {
        return Err(PlanError::NegativeParameter { name, value });
    }
    u32::try_from(value).map_err(|_| PlanError::ParameterOutOfRange { name, value })
}

impl CostParams {
    /// Validates signed inputs (as they arrive from config files or the CLI)
    /// and builds the parameter record. Any negative value is rejected.
    pub fn new(
        purchase_cost: i64,
        holding_cost: i64,
        shortage_penalty: i64,
        max_order: i64,
        max_stock: i64,
    ) -> Result<Self, PlanError> {
        Ok(Self {
            purchase_cost: non_negative("purchase_cost", purchase_cost)?,
            holding_cost: non_negative("holding_cost", holding_cost)?,
            shortage_penalty: non_negative("shortage_penalty", shortage_penalty)?,
            max_order: non_negative("max_order", max_order)?,
            max_stock: non_negative("max_stock", max_stock)?,
        })
    }

    /// Number of distinct stock levels, `Smax + 1`.
    pub fn stock_levels(&self) -> usize {
        self.max_stock as usize + 1
    }

    /// Clamps an arbitrary signed stock figure into `[0, Smax]`.
    pub fn clamp_stock(&self, stock: i64) -> u32 {
        stock.clamp(0, self.max_stock as i64) as u32
    }

    /// Rejects horizons whose value table would exceed [`MAX_STATE_CELLS`].
    pub fn check_state_space(&self, horizon: usize) -> Result<(), PlanError> {
        let cells = (horizon as u64 + 1).saturating_mul(self.stock_levels() as u64);
        if cells > MAX_STATE_CELLS {
            return Err(PlanError::StateSpaceTooLarge {
                cells,
                limit: MAX_STATE_CELLS,
            });
        }
        Ok(())
    }
}
