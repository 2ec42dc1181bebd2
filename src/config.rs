//! # Snapshot Configuration
//!
//! The endpoint, contract addresses, chunk size and output path are injected
//! into the run rather than read from globals. Defaults reproduce the fixed
//! Celo deployment in [`constants`](crate::constants).
//!
//! Precedence (highest to lowest):
//! 1. Environment variables prefixed with `POSITIONS_` (`POSITIONS_RPC_URL`, ...)
//! 2. `position-snapshot.toml` in the working directory, if present
//! 3. Compiled defaults

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{contracts, network, system};
use crate::error::{SnapshotError, SnapshotResult};

/// Configuration for a single snapshot run
///
/// # Examples
///
/// ```rust
/// use position_snapshot::config::SnapshotConfig;
///
/// let config = SnapshotConfig::default();
/// assert_eq!(config.rpc_url, "https://forno.celo.org");
/// assert_eq!(config.chunk_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// JSON-RPC endpoint of the chain hosting the ledger
    pub rpc_url: String,
    /// HomoraBank (ledger) contract address
    pub bank_address: String,
    /// Multicall2 aggregator contract address
    pub multicall_address: String,
    /// Where the snapshot document is written
    pub output_path: PathBuf,
    /// Sub-calls per aggregate invocation
    pub chunk_size: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            rpc_url: network::DEFAULT_RPC_URL.to_string(),
            bank_address: contracts::HOMORA_BANK_ADDRESS.to_string(),
            multicall_address: contracts::MULTICALL2_ADDRESS.to_string(),
            output_path: PathBuf::from(system::DEFAULT_OUTPUT_PATH),
            chunk_size: system::MAX_CHUNK,
        }
    }
}

impl SnapshotConfig {
    /// Load configuration from the working directory file and environment
    pub fn load() -> SnapshotResult<Self> {
        let file = File::with_name(system::CONFIG_FILE_NAME).required(false);
        Self::build(file, true)
    }

    /// Load configuration from a specific file, ignoring the environment
    pub fn load_from_file(path: &Path) -> SnapshotResult<Self> {
        if !path.is_file() {
            return Err(SnapshotError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::build(File::from(path.to_path_buf()), false)
    }

    fn build<S>(file: S, with_env: bool) -> SnapshotResult<Self>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("rpc_url", defaults.rpc_url)
            .and_then(|b| b.set_default("bank_address", defaults.bank_address))
            .and_then(|b| b.set_default("multicall_address", defaults.multicall_address))
            .and_then(|b| {
                b.set_default(
                    "output_path",
                    defaults.output_path.to_string_lossy().into_owned(),
                )
            })
            .and_then(|b| b.set_default("chunk_size", defaults.chunk_size as i64))
            .map_err(|e| SnapshotError::config_error(format!("Invalid default: {e}")))?;

        builder = builder.add_source(file);
        if with_env {
            builder = builder
                .add_source(Environment::with_prefix(system::ENV_PREFIX).try_parsing(true));
        }

        let config: Self = builder
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| SnapshotError::config_error(format!("Failed to load config: {e}")))?;

        config.validate()?;
        debug!(?config, "Loaded snapshot configuration");
        Ok(config)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> SnapshotResult<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(SnapshotError::config_error("rpc_url must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(SnapshotError::config_error("output_path must not be empty"));
        }
        if self.chunk_size == 0 {
            return Err(SnapshotError::config_error(
                "chunk_size must be greater than zero",
            ));
        }
        Ok(())
    }
}
