//! # Position Snapshot Fetcher
//!
//! Reads every position owner from the configured HomoraBank deployment and
//! writes `data/positions.json`. Prints a one-line summary on success; on
//! failure the error chain goes to stderr and the process exits non-zero.

use anyhow::Context;
use position_snapshot::{fetch_all_positions, logging, FetchSummary, SnapshotConfig};
use std::process;
use tracing::error;

async fn run() -> anyhow::Result<FetchSummary> {
    let config = SnapshotConfig::load().context("Failed to load snapshot configuration")?;
    let summary = fetch_all_positions(&config)
        .await
        .with_context(|| format!("Failed to snapshot positions into {}", config.output_path.display()))?;
    Ok(summary)
}

#[tokio::main]
async fn main() {
    logging::init_structured_logging();

    match run().await {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            error!(error = %e, "Position snapshot failed");
            eprintln!("{e:?}");
            process::exit(1);
        }
    }
}
