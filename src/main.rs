//! Financial Planner CLI
//!
//! Builds a plan for one client, entered via flags or loaded from a sheet

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use financial_planner::{
    profile::load_profile, ClientProfile, PlanReport, PlanningAssumptions, PlanningEngine,
};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Retirement gap, SIP and goal funding report for a single client
#[derive(Debug, Parser)]
#[command(name = "financial_planner", version, about)]
struct Cli {
    /// Client sheet (CSV) to load instead of the manual entry flags
    #[arg(long, value_name = "CSV")]
    input: Option<PathBuf>,

    /// Assumption overrides (key,value CSV)
    #[arg(long, value_name = "CSV")]
    assumptions: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[arg(long, default_value = "John Doe")]
    name: String,

    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(30..=60))]
    age: u32,

    /// Annual income (Rs)
    #[arg(long, default_value_t = 1_200_000.0)]
    income: f64,

    /// Annual expenses (Rs)
    #[arg(long, default_value_t = 800_000.0)]
    expenses: f64,

    /// Total debt (Rs)
    #[arg(long, default_value_t = 200_000.0)]
    debt: f64,

    /// Priority goal target (Rs)
    #[arg(long, default_value_t = 1_500_000.0)]
    goal_amount: f64,

    /// Amount already saved for the goal (Rs)
    #[arg(long, default_value_t = 500_000.0)]
    goal_current: f64,
}

impl Cli {
    fn profile(&self) -> Result<ClientProfile> {
        if let Some(path) = &self.input {
            return load_profile(path)
                .with_context(|| format!("Failed to load client sheet {}", path.display()));
        }

        let profile = ClientProfile::new(
            self.name.clone(),
            self.age,
            self.income,
            self.expenses,
            self.debt,
            self.goal_amount,
            self.goal_current,
        );
        profile.validate().context("Invalid client details")?;
        Ok(profile)
    }

    fn assumptions(&self) -> Result<PlanningAssumptions> {
        match &self.assumptions {
            Some(path) => PlanningAssumptions::from_csv_path(path)
                .with_context(|| format!("Failed to load assumptions {}", path.display())),
            None => Ok(PlanningAssumptions::default()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let profile = cli.profile()?;
    let engine = PlanningEngine::new(cli.assumptions()?);

    let metrics = engine
        .project(&profile)
        .with_context(|| format!("Cannot build a plan for {}", profile.name))?;
    let recommendations = engine.recommend(&metrics);
    info!("{} recommendation(s) for {}", recommendations.len(), profile.name);

    let report = PlanReport::new(metrics, recommendations);
    let rendered = match cli.format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => report.to_json()?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
