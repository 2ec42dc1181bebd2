#![allow(clippy::doc_markdown)] // Allow technical terms like HomoraBank, Multicall2 in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Position Snapshot
//!
//! Reads the owner of every lending position in a HomoraBank deployment and
//! persists the result as a JSON snapshot.
//!
//! ## Overview
//!
//! A run is a single linear pipeline:
//!
//! 1. Read `nextPositionId()` from the ledger contract.
//! 2. Build one `getPositionInfo(id)` request for every id in `1..=N`.
//! 3. Split the requests into chunks of 100 and send every chunk through
//!    Multicall2 `aggregate` concurrently.
//! 4. Decode each payload's `owner`, pairing it with its position id.
//! 5. Overwrite `data/positions.json` with the resulting document.
//!
//! Every failure aborts the run before anything is written.
//!
//! ## Module Organization
//!
//! - [`config`] - Injected endpoint, addresses, chunk size and output path
//! - [`contracts`] - ABI bindings and contract address validation
//! - [`ledger`] - The chain access seam and its JSON-RPC implementation
//! - [`requests`] - Per-position read requests
//! - [`aggregator`] - Chunked scatter/gather over aggregate calls
//! - [`decoder`] - Payload decoding into position records
//! - [`snapshot`] - The persisted document
//! - [`fetcher`] - The end-to-end pipeline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use position_snapshot::{fetch_all_positions, SnapshotConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SnapshotConfig::default();
//! let summary = fetch_all_positions(&config).await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod ledger;
pub mod logging;
pub mod requests;
pub mod snapshot;

pub use aggregator::{aggregate_chunked, dispatch_chunked};
pub use config::SnapshotConfig;
pub use error::{SnapshotError, SnapshotResult};
pub use fetcher::{fetch_all_positions, FetchSummary, PositionFetcher};
pub use ledger::{PositionLedger, RpcLedger};
pub use requests::{build_position_requests, PositionRequest};
pub use snapshot::{PositionRecord, PositionSnapshot};
