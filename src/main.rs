use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use replenishment_dp::io::demand::{self, DemandSource};
use replenishment_dp::io::reporting;
use replenishment_dp::{solve, verify, PlannerConfig, SolverKind, TieBreak};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Lowest,
    Highest,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Lowest => TieBreak::LowestOrder,
            TieBreakArg::Highest => TieBreak::HighestOrder,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DemandKind {
    Simulate,
    Constant,
    Normal,
}

/// Plan daily replenishment with two dynamic-programming solvers and check they agree.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON file with planner settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV with a `demand` column; otherwise `--demand-source` builds one
    #[arg(long)]
    demand_file: Option<PathBuf>,

    /// Generator used when no demand file is given
    #[arg(long, value_enum)]
    demand_source: Option<DemandKind>,

    /// Daily figure for `--demand-source constant`
    #[arg(long, default_value_t = 10)]
    value: u32,

    /// Mean for `--demand-source normal`
    #[arg(long, default_value_t = 10.0)]
    mean: f64,

    /// Standard deviation for `--demand-source normal`
    #[arg(long, default_value_t = 3.0)]
    std_dev: f64,

    /// Days to generate when no demand file is given
    #[arg(long)]
    days: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, allow_negative_numbers = true)]
    initial_stock: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    purchase_cost: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    holding_cost: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    shortage_penalty: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    max_order: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    max_stock: Option<i64>,

    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,

    /// Write the per-day plan here
    #[arg(long)]
    plan_csv: Option<PathBuf>,

    /// Write the text report here
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn planner_config(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_json_file(path).context("loading planner config")?,
            None => PlannerConfig::default(),
        };

        if let Some(kind) = self.demand_source {
            config.demand_source = match kind {
                DemandKind::Simulate => DemandSource::Simulate,
                DemandKind::Constant => DemandSource::Constant { value: self.value },
                DemandKind::Normal => DemandSource::Normal {
                    mean: self.mean,
                    std_dev: self.std_dev,
                },
            };
        }
        if let Some(v) = self.days {
            config.horizon_days = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.initial_stock {
            config.initial_stock = v;
        }
        if let Some(v) = self.purchase_cost {
            config.purchase_cost = v;
        }
        if let Some(v) = self.holding_cost {
            config.holding_cost = v;
        }
        if let Some(v) = self.shortage_penalty {
            config.shortage_penalty = v;
        }
        if let Some(v) = self.max_order {
            config.max_order = v;
        }
        if let Some(v) = self.max_stock {
            config.max_stock = v;
        }
        if let Some(v) = self.tie_break {
            config.tie_break = v.into();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("=== Replenishment Planner ===");

    // 1. CONFIGURATION
    let config = cli.planner_config()?;
    let params = config.cost_params()?;

    // 2. DEMAND
    let schedule = match &cli.demand_file {
        Some(path) => demand::load_demand_csv(path).context("reading demand schedule")?,
        None => config
            .demand_source
            .schedule(config.horizon_days, config.seed, &config.item_levels)
            .with_context(|| format!("generating demand from {:?}", config.demand_source))?,
    };
    info!("demand schedule: {:?}", schedule);

    // 3. SOLVE BOTH WAYS
    let bottom_up = solve(
        SolverKind::BottomUp,
        &schedule,
        config.initial_stock,
        &params,
        config.tie_break,
    )?;
    let top_down = solve(
        SolverKind::TopDown,
        &schedule,
        config.initial_stock,
        &params,
        config.tie_break,
    )?;

    // 4. VERIFY & REPORT
    let verdict = verify::compare(&bottom_up, &top_down);
    let inputs = reporting::ReportInputs {
        params: &params,
        tie_break: config.tie_break,
        demand: &schedule,
        initial_stock: config.initial_stock,
    };
    let report = reporting::render_report(&inputs, &[&bottom_up, &top_down], &verdict);
    println!("{report}");

    if let Some(path) = &cli.plan_csv {
        reporting::write_plan_csv(path, &bottom_up.days).context("exporting plan")?;
        println!("Plan written to {}", path.display());
    }
    if let Some(path) = &cli.report {
        reporting::write_report(path, &report).context("saving report")?;
        println!("Report written to {}", path.display());
    }

    if let Err(divergence) = verdict {
        bail!("solver equivalence check failed: {divergence}");
    }
    Ok(())
}
