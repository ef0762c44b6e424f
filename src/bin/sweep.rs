//! Project every slider position (or a CSV of inputs) and write one summary row each
//!
//! Usage: cargo run --release --bin sweep -- --rule rate-proportional --output sweep.csv

use anyhow::{Context, Result};
use clap::Parser;
use growth_projector::inputs::load_inputs;
use growth_projector::projection::{DoublingRule, ProjectionSummary};
use growth_projector::scenario::sweep_grid;
use growth_projector::{AppConfig, ScenarioRunner};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Project a grid of inputs in parallel")]
struct Cli {
    /// Doubling rule: calibrated or rate-proportional. Overrides the config file.
    #[arg(long, value_parser = parse_rule)]
    rule: Option<DoublingRule>,

    /// Path to a JSON config file (slider ranges, rule).
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV of inputs (InitialInvestment,MonthlyRatePercent). Defaults to the slider grid.
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

fn parse_rule(name: &str) -> std::result::Result<DoublingRule, String> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| format!("unknown doubling rule '{}'", name))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(rule) = cli.rule {
        config.rule = rule;
    }

    let inputs = match &cli.inputs {
        Some(path) => load_inputs(path)
            .with_context(|| format!("loading inputs {}", path.display()))?,
        None => sweep_grid(&config.investment_slider, &config.rate_slider),
    };
    println!("Projecting {} inputs with the {} rule...", inputs.len(), config.rule.as_str());

    let runner = ScenarioRunner::with_config(config.projection_config());
    let proj_start = Instant::now();
    let results = runner.run_batch(&inputs);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut failed = 0usize;
    let mut summaries: Vec<ProjectionSummary> = Vec::with_capacity(results.len());

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(result) => {
                let summary = result.summary();
                writer.serialize(&summary)?;
                summaries.push(summary);
            }
            Err(err) => {
                warn!("skipping {:?}: {}", input, err);
                failed += 1;
            }
        }
    }
    writer.flush()?;
    info!("{} rows written, {} skipped", summaries.len(), failed);

    println!("Output written to {}", cli.output.display());

    if let (Some(fastest), Some(slowest)) = (
        summaries.iter().min_by_key(|s| s.doubling_month),
        summaries.iter().max_by_key(|s| s.doubling_month),
    ) {
        println!("\nSweep Summary:");
        println!(
            "  Fastest doubling: {} months at {}%/month",
            fastest.doubling_month, fastest.monthly_rate_percent
        );
        println!(
            "  Slowest doubling: {} months at {}%/month",
            slowest.doubling_month, slowest.monthly_rate_percent
        );
    }
    if failed > 0 {
        println!("  Skipped inputs: {}", failed);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
