//! Growth Projector CLI
//!
//! Projects one input and prints the series, milestones and stat cards

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use growth_projector::{
    format::{
        doubling_banner, format_currency, format_growth_percent, format_x_axis_tick,
        monthly_return_banner, stat_cards, year_ticks,
    },
    AppConfig, DoublingRule, GrowthProjector, ProjectionInput, ProjectionResult,
};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRule {
    Calibrated,
    RateProportional,
}

impl From<CliRule> for DoublingRule {
    fn from(value: CliRule) -> Self {
        match value {
            CliRule::Calibrated => DoublingRule::Calibrated,
            CliRule::RateProportional => DoublingRule::RateProportional,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "growth_projector", about = "Project monthly investment growth to its doubling point")]
struct Cli {
    /// Initial investment in dollars. Defaults to the investment slider default.
    #[arg(long)]
    initial: Option<f64>,

    /// Monthly return in percent (5 = 5%). Defaults to the rate slider default.
    #[arg(long)]
    rate: Option<f64>,

    /// Doubling rule. Overrides the config file.
    #[arg(long, value_enum)]
    rule: Option<CliRule>,

    /// Path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full series to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Number of months to print in the table.
    #[arg(long, default_value_t = 24)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(rule) = cli.rule {
        config.rule = rule.into();
    }

    let defaults = config.default_input();
    let input = ProjectionInput::new(
        cli.initial.unwrap_or(defaults.initial_investment),
        cli.rate.unwrap_or(defaults.monthly_rate_percent),
    );

    let projector = GrowthProjector::new(config.projection_config());
    let result = projector.project(&input)?;
    info!(
        "projected {} months with the {} rule",
        result.series.len(),
        result.rule.as_str()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, cli.rows);
    }

    if let Some(path) = &cli.csv {
        write_series_csv(path, &result)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull series written to: {}", path.display());
    }

    Ok(())
}

fn print_report(result: &ProjectionResult, rows: usize) {
    println!("Growth Projector v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Initial investment: {}", format_currency(result.input.initial_investment));
    println!("Monthly rate:       {}%", result.input.monthly_rate_percent);
    println!("Doubling rule:      {}", result.rule.as_str());
    println!();

    println!("{:>5} {:>6} {:>14} {:>8}", "Month", "Axis", "Value", "Growth");
    println!("{}", "-".repeat(36));
    for point in result.series.iter().take(rows) {
        let marker = if point.month == result.doubling_month { " <- doubled" } else { "" };
        println!(
            "{:>5} {:>6} {:>14.2} {:>8}{}",
            point.month,
            format_x_axis_tick(point.month),
            point.value,
            format_growth_percent(result.growth_percent(point.value)),
            marker,
        );
    }
    if result.series.len() > rows {
        println!("... ({} more months)", result.series.len() - rows);
    }

    println!();
    for card in stat_cards(result) {
        println!("  {:<20} {}", card.title, card.value);
    }
    if let Some(month) = result.risk_free_month {
        println!("  {:<20} {} months", "Risk-free Point", month);
    }

    println!();
    println!("{}", monthly_return_banner(result));
    println!("{}", doubling_banner(result));

    let ticks: Vec<String> = year_ticks(result.doubling_month)
        .into_iter()
        .map(format_x_axis_tick)
        .collect();
    println!("Axis ticks: {}", ticks.join(" "));
}

fn write_series_csv(path: &Path, result: &ProjectionResult) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Value,GrowthPct")?;
    for point in &result.series {
        writeln!(
            file,
            "{},{:.2},{:.4}",
            point.month,
            point.value,
            result.growth_percent(point.value)
        )?;
    }
    Ok(())
}
