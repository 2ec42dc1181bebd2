//! # Position Fetcher
//!
//! The snapshot pipeline: resolve the position count, build one read per
//! position, aggregate them in concurrent chunks, decode owners and write
//! the document. Any failure aborts the run before the file is touched.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::aggregator::aggregate_chunked;
use crate::config::SnapshotConfig;
use crate::decoder::decode_owner_map;
use crate::error::{SnapshotError, SnapshotResult};
use crate::ledger::{PositionLedger, RpcLedger};
use crate::requests::build_position_requests;
use crate::snapshot::PositionSnapshot;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub next_position_id: u64,
    pub positions: usize,
    pub path: PathBuf,
}

impl fmt::Display for FetchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discovered and wrote {} positions", self.positions)
    }
}

/// Runs the snapshot pipeline against a [`PositionLedger`]
#[derive(Debug)]
pub struct PositionFetcher<L> {
    ledger: L,
    chunk_size: usize,
}

impl<L: PositionLedger> PositionFetcher<L> {
    pub fn new(ledger: L, chunk_size: usize) -> Self {
        Self { ledger, chunk_size }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Read the ledger's position count once.
    pub async fn resolve_count(&self) -> SnapshotResult<u64> {
        let raw = self.ledger.next_position_id().await?;
        let count = u64::try_from(raw).map_err(|e| {
            SnapshotError::call_failed("nextPositionId", format!("count {raw} out of range: {e}"))
        })?;
        info!(next_position_id = count, "Resolved position count");
        Ok(count)
    }

    /// Build the full snapshot in memory without touching the filesystem.
    #[instrument(skip(self), fields(chunk_size = self.chunk_size))]
    pub async fn fetch_snapshot(&self) -> SnapshotResult<PositionSnapshot> {
        let count = self.resolve_count().await?;
        let requests = build_position_requests(self.ledger.ledger_address(), count);

        let payloads = aggregate_chunked(&self.ledger, &requests, self.chunk_size).await?;
        let owner_map = decode_owner_map(&payloads)?;

        Ok(PositionSnapshot::new(count, owner_map))
    }

    /// Fetch the snapshot and overwrite `path` with it.
    pub async fn write_snapshot(&self, path: &Path) -> SnapshotResult<FetchSummary> {
        let snapshot = self.fetch_snapshot().await?;
        snapshot.write_to(path).await?;

        Ok(FetchSummary {
            next_position_id: snapshot.next_position_id,
            positions: snapshot.len(),
            path: path.to_path_buf(),
        })
    }
}

/// Connect to the configured deployment and write a fresh snapshot.
pub async fn fetch_all_positions(config: &SnapshotConfig) -> SnapshotResult<FetchSummary> {
    config.validate()?;
    let ledger = RpcLedger::connect(config).await?;
    PositionFetcher::new(ledger, config.chunk_size)
        .write_snapshot(&config.output_path)
        .await
}
