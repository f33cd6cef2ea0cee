use clap::{Parser, Subcommand};
use scran_it::core::curation::{drop_unaddressed, filter_chains, CurationReport};
use scran_it::services::{read_records, write_records, CatalogError};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "scran-curate")]
#[command(about = "Offline maintenance for the Scran It venue catalog")]
struct Cli {
    /// Venue catalog to rewrite in place
    #[arg(long, env = "SCRAN_VENUES_PATH", default_value = "data/restaurants.json")]
    venues: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Remove entries without an address
    DropUnaddressed,
    /// Remove every location of any name listed more than once
    FilterChains,
}

async fn run(cli: Cli) -> Result<CurationReport, CatalogError> {
    // Raw records, so fields the search service does not model survive the rewrite
    let records: Vec<Value> = read_records(&cli.venues).await?;

    let (kept, report) = match cli.command {
        Commands::DropUnaddressed => drop_unaddressed(records),
        Commands::FilterChains => filter_chains(records),
    };

    write_records(&cli.venues, &kept).await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let command = format!("{:?}", cli.command);

    match run(cli).await {
        Ok(report) => {
            tracing::info!(
                "{} done. Before: {}, after: {} (removed {})",
                command,
                report.before,
                report.after,
                report.removed()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{} failed: {}", command, e);
            ExitCode::FAILURE
        }
    }
}
