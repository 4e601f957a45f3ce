//! adoptmetrics CLI - adoption metrics and ROI reporting.

mod dataset;
mod demo;

use std::path::PathBuf;

use adoptmetrics_analytics::MetricsCollector;
use adoptmetrics_core::{AdoptionMetrics, ProductivityMetrics, QualityMetrics};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::dataset::{load_dataset, load_valuation};

#[derive(Parser)]
#[command(name = "adoptmetrics")]
#[command(about = "Adoption metrics, ROI and recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Valuation config (JSON); defaults apply to missing fields
    #[arg(long, global = true)]
    valuation: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report from a dataset file
    Report {
        /// Dataset file (JSON)
        input: PathBuf,
        /// Only use records of this group
        #[arg(long)]
        group: Option<String>,
    },
    /// Print the latest value of every well-known metric
    Latest {
        /// Dataset file (JSON)
        input: PathBuf,
    },
    /// List groups and their record counts
    Groups {
        /// Dataset file (JSON)
        input: PathBuf,
    },
    /// Generate a report for the built-in sample scenario
    Demo,
}

fn init_logging() {
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_valuation(cli.valuation.as_deref()).await?;

    match cli.command {
        Commands::Report { input, group } => {
            let collector = load_dataset(&input).await?.into_collector(config)?;
            let collector = match group {
                Some(group) => {
                    info!("Reporting on group '{}'", group);
                    collector.for_group(&group)
                }
                None => collector,
            };
            print_report(&collector)?;
        }
        Commands::Latest { input } => {
            let collector = load_dataset(&input).await?.into_collector(config)?;
            let ledger = collector.ledger();
            let latest = serde_json::json!({
                "productivity": ProductivityMetrics::from_ledger(ledger),
                "quality": QualityMetrics::from_ledger(ledger),
                "adoption": AdoptionMetrics::from_ledger(ledger),
            });
            println!("{}", serde_json::to_string_pretty(&latest)?);
        }
        Commands::Groups { input } => {
            let collector = load_dataset(&input).await?.into_collector(config)?;
            let ledger = collector.ledger();

            println!("Groups ({})", ledger.groups().len());
            for group in ledger.groups() {
                println!("  {} | {} records", group, ledger.by_group(group).count());
            }
        }
        Commands::Demo => {
            let collector = demo::sample_collector(config)?;
            print_report(&collector)?;
        }
    }

    Ok(())
}

fn print_report(collector: &MetricsCollector) -> Result<()> {
    let report = collector.generate_report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
