// src/config.rs

use crate::error::{DataError, PlanError};
use crate::io::demand::DemandSource;
use crate::model::{CostParams, TieBreak};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Editable run settings. Cost fields stay signed here so bad input is
/// caught by [`CostParams::new`] instead of at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub horizon_days: usize,
    pub seed: u64,
    /// Where the demand schedule comes from when no CSV file is given.
    pub demand_source: DemandSource,
    pub initial_stock: i64,
    /// Per-item stock levels fed to the consumption simulator.
    pub item_levels: Vec<u32>,
    pub purchase_cost: i64,
    pub holding_cost: i64,
    pub shortage_penalty: i64,
    pub max_order: i64,
    pub max_stock: i64,
    pub tie_break: TieBreak,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            seed: 42,
            demand_source: DemandSource::Simulate,
            initial_stock: 20,
            // gloves, syringes, test tubes, reagents, masks
            item_levels: vec![250, 80, 60, 50, 170],
            purchase_cost: 1,
            holding_cost: 1,
            shortage_penalty: 4,
            max_order: 100,
            max_stock: 150,
            tie_break: TieBreak::LowestOrder,
        }
    }
}

impl PlannerConfig {
    /// Reads a JSON file. Missing fields fall back to [`Default`].
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(file).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Snapshot of the cost fields as an immutable, validated record.
    pub fn cost_params(&self) -> Result<CostParams, PlanError> {
        CostParams::new(
            self.purchase_cost,
            self.holding_cost,
            self.shortage_penalty,
            self.max_order,
            self.max_stock,
        )
    }
}
