// src/io/reporting.rs

use crate::error::DataError;
use crate::model::{CostParams, TieBreak};
use crate::solver::reconstruct::DayPlan;
use crate::solver::verify::Divergence;
use crate::solver::SolveResult;
use log::info;
use std::fs;
use std::path::Path;

/// Writes the per-day plan to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/plan.csv").
/// * `data` - The replayed days of a solve result.
pub fn write_plan_csv(file_path: &Path, data: &[DayPlan]) -> Result<(), DataError> {
    let csv_err = |source| DataError::Csv {
        path: file_path.to_path_buf(),
        source,
    };
    let mut wtr = csv::Writer::from_path(file_path).map_err(csv_err)?;

    for record in data {
        wtr.serialize(record).map_err(csv_err)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush().map_err(|source| DataError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    info!("exported {} plan rows to '{}'", data.len(), file_path.display());
    Ok(())
}

/// Inputs echoed at the top of a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub params: &'a CostParams,
    pub tie_break: TieBreak,
    pub demand: &'a [u32],
    pub initial_stock: i64,
}

/// Renders both solve results and the equivalence verdict as plain text.
pub fn render_report(
    inputs: &ReportInputs<'_>,
    results: &[&SolveResult],
    verdict: &Result<(), Divergence>,
) -> String {
    let p = inputs.params;
    let mut lines = vec![
        "=== Replenishment Plan ===".to_string(),
        format!(
            "Costs: purchase {} | holding {} | shortage {}",
            p.purchase_cost, p.holding_cost, p.shortage_penalty
        ),
        format!(
            "Bounds: max order {} | max stock {} | tie-break {:?}",
            p.max_order, p.max_stock, inputs.tie_break
        ),
        format!("Initial stock: {}", inputs.initial_stock),
        format!("Demand ({} days): {:?}", inputs.demand.len(), inputs.demand),
    ];

    for result in results {
        lines.push(String::new());
        lines.push(format!("--- {} ---", result.solver));
        lines.push(format!("Total cost: {}", result.total_cost));
        lines.push(format!("Orders: {:?}", result.orders));
        lines.push(format!("Stock trajectory: {:?}", result.trajectory));
        lines.push(format!("States evaluated: {}", result.states_evaluated));
    }

    if let Some(first) = results.first() {
        lines.push(String::new());
        lines.push(format!(
            "{:>4} {:>7} {:>8} {:>6} {:>9} {:>8} {:>8} {:>8}",
            "Day", "Demand", "Opening", "Order", "Restocked", "Short", "Closing", "Cost"
        ));
        lines.push("-".repeat(66));
        for day in &first.days {
            lines.push(format!(
                "{:>4} {:>7} {:>8} {:>6} {:>9} {:>8} {:>8} {:>8}",
                day.day,
                day.demand,
                day.opening_stock,
                day.order,
                day.replenished,
                day.shortage,
                day.closing_stock,
                day.cost
            ));
        }
    }

    lines.push(String::new());
    lines.push(match verdict {
        Ok(()) => "Equivalence: solvers agree".to_string(),
        Err(divergence) => format!("Equivalence: DIVERGENCE - {divergence}"),
    });

    lines.join("\n")
}

/// Saves a rendered report to disk.
pub fn write_report(file_path: &Path, report: &str) -> Result<(), DataError> {
    fs::write(file_path, report).map_err(|source| DataError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    info!("report written to '{}'", file_path.display());
    Ok(())
}
