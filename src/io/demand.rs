// src/io/demand.rs

use crate::error::DataError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator used to build a demand schedule when none is loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemandSource {
    /// Consumption simulated over the configured inventory snapshot.
    Simulate,
    /// Same figure every day.
    Constant { value: u32 },
    /// Seeded normal draws, rounded and floored at zero.
    Normal { mean: f64, std_dev: f64 },
}

impl DemandSource {
    /// Builds a `days`-long schedule. `seed` drives the random sources and
    /// `item_levels` is only read by [`DemandSource::Simulate`].
    pub fn schedule(
        &self,
        days: usize,
        seed: u64,
        item_levels: &[u32],
    ) -> Result<Vec<u32>, NormalError> {
        match *self {
            DemandSource::Simulate => Ok(simulate_consumption(item_levels, days, seed)),
            DemandSource::Constant { value } => Ok(generate_constant_demand(days, value)),
            DemandSource::Normal { mean, std_dev } => {
                generate_normal_demand(days, mean, std_dev, seed)
            }
        }
    }
}

/// Generates a demand schedule where every day has the exact same figure.
pub fn generate_constant_demand(days: usize, value: u32) -> Vec<u32> {
    vec![value; days]
}

/// Generates a demand schedule based on a Normal (Bell Curve) distribution.
///
/// Samples are rounded and negative values clamped to 0. The same `seed`
/// always yields the same schedule.
///
/// # Arguments
/// * `days` - Length of the schedule.
/// * `mean` - The average daily demand.
/// * `std_dev` - The standard deviation (volatility).
/// * `seed` - RNG seed.
pub fn generate_normal_demand(
    days: usize,
    mean: f64,
    std_dev: f64,
    seed: u64,
) -> Result<Vec<u32>, NormalError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev)?;

    let schedule = (0..days)
        .map(|_| {
            let val: f64 = normal.sample(&mut rng);
            val.round().max(0.0) as u32
        })
        .collect();

    Ok(schedule)
}

/// Simulates daily consumption over an inventory snapshot and returns the
/// consolidated demand per day.
///
/// Each day, every item with stock left consumes a uniform draw from
/// `[0, max(1, level / 10)]`, never more than it holds. Levels shrink as
/// they are consumed, so later days tend to draw less.
pub fn simulate_consumption(item_levels: &[u32], days: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut levels = item_levels.to_vec();
    let mut schedule = Vec::with_capacity(days);

    for _ in 0..days {
        let mut total = 0u32;
        for level in levels.iter_mut() {
            if *level == 0 {
                continue;
            }
            let ceiling = (*level / 10).max(1);
            let consumed = rng.gen_range(0..=ceiling).min(*level);
            *level -= consumed;
            total = total.saturating_add(consumed);
        }
        schedule.push(total);
    }

    schedule
}

#[derive(Debug, Deserialize)]
struct DemandRow {
    demand: u32,
}

/// Loads a demand schedule from a CSV file with a `demand` column.
/// Other columns (dates, labels) are ignored.
pub fn load_demand_csv(path: &Path) -> Result<Vec<u32>, DataError> {
    let csv_err = |source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let mut schedule = Vec::new();

    for row in reader.deserialize() {
        let row: DemandRow = row.map_err(csv_err)?;
        schedule.push(row.demand);
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_schedule() {
        assert_eq!(generate_constant_demand(3, 4), vec![4, 4, 4]);
    }

    #[test]
    fn normal_schedule_is_seeded_and_non_negative() {
        let a = generate_normal_demand(50, 2.0, 5.0, 7).unwrap();
        let b = generate_normal_demand(50, 2.0, 5.0, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn normal_rejects_bad_std_dev() {
        assert!(generate_normal_demand(5, 1.0, -1.0, 0).is_err());
    }

    #[test]
    fn consumption_never_exceeds_snapshot() {
        let levels = [250, 80, 60, 50, 170];
        let schedule = simulate_consumption(&levels, 30, 42);
        assert_eq!(schedule.len(), 30);
        let consumed: u32 = schedule.iter().sum();
        assert!(consumed <= levels.iter().sum::<u32>());
        // per-day ceiling: sum of 10% of the starting levels
        assert!(schedule.iter().all(|&d| d <= 25 + 8 + 6 + 5 + 17));
    }

    #[test]
    fn consumption_is_reproducible() {
        let levels = [30, 12];
        assert_eq!(
            simulate_consumption(&levels, 10, 1),
            simulate_consumption(&levels, 10, 1)
        );
    }

    #[test]
    fn empty_items_consume_nothing() {
        assert_eq!(simulate_consumption(&[0, 0], 4, 9), vec![0, 0, 0, 0]);
    }

    #[test]
    fn each_source_builds_full_schedule() {
        let levels = [40, 40];
        let constant = DemandSource::Constant { value: 6 };
        assert_eq!(constant.schedule(4, 0, &levels).unwrap(), vec![6; 4]);

        let normal = DemandSource::Normal {
            mean: 8.0,
            std_dev: 2.0,
        };
        assert_eq!(
            normal.schedule(12, 3, &levels).unwrap(),
            generate_normal_demand(12, 8.0, 2.0, 3).unwrap()
        );

        let simulated = DemandSource::Simulate.schedule(5, 9, &levels).unwrap();
        assert_eq!(simulated, simulate_consumption(&levels, 5, 9));
    }

    #[test]
    fn normal_source_surfaces_bad_parameters() {
        let bad = DemandSource::Normal {
            mean: 1.0,
            std_dev: -2.0,
        };
        assert!(bad.schedule(3, 0, &[]).is_err());
    }

    #[test]
    fn malformed_csv_keeps_cause() {
        use std::error::Error as _;

        let path = std::env::temp_dir().join("replenishment_dp_bad_demand.csv");
        std::fs::write(&path, "demand\nten\n").unwrap();
        let err = load_demand_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DataError::Csv { .. }));
        assert!(err.source().is_some());
    }

    #[test]
    fn loads_demand_column() {
        let path = std::env::temp_dir().join("replenishment_dp_demand_test.csv");
        std::fs::write(&path, "day,demand\n2024-01-01,10\n2024-01-02,0\n2024-01-03,5\n").unwrap();
        let schedule = load_demand_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(schedule, vec![10, 0, 5]);
    }
}
