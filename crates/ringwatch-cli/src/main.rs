//! CLI for fraud-ring and smurfing pattern detection over transaction CSVs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ringwatch_core::{analyze, DetectionConfig, RawTransaction, RingwatchError, REQUIRED_COLUMNS};

#[derive(Parser)]
#[command(name = "ringwatch")]
#[command(about = "Fraud-ring and money-muling pattern detection over transaction graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transaction CSV and report fraud rings and account risk scores
    Analyze {
        /// Path to the input transaction CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Write the result to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .init();

    match cli.command {
        Commands::Analyze { input, output, pretty } => {
            run_analyze(&input, output.as_deref(), pretty)
        }
    }
}

fn run_analyze(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let rows = read_transactions(input)?;
    tracing::info!(rows = rows.len(), "loaded transactions");

    let config = DetectionConfig::default();
    let result = analyze(&rows, &config)?;

    tracing::info!(
        accounts = result.accounts.len(),
        fraud_rings = result.fraud_rings.len(),
        "analysis complete"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing output to {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn read_transactions(path: &Path) -> Result<Vec<RawTransaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RingwatchError::schema(missing).into());
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawTransaction = record?;
        rows.push(row);
    }
    Ok(rows)
}
