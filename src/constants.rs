//! # System Constants
//!
//! Fixed defaults describing the single HomoraBank deployment this tool
//! snapshots. Every value here can be overridden through
//! [`SnapshotConfig`](crate::config::SnapshotConfig); with no overrides the
//! tool reads the Celo mainnet deployment.

/// Network endpoint defaults
pub mod network {
    /// Public Celo mainnet JSON-RPC endpoint
    pub const DEFAULT_RPC_URL: &str = "https://forno.celo.org";
}

/// Deployed contract addresses
pub mod contracts {
    /// HomoraBank, the lending ledger that owns every position
    pub const HOMORA_BANK_ADDRESS: &str = "0x827cCeA3D460D458393EEAfE831698d83FE47BA7";
    /// Multicall2 aggregator used to batch `getPositionInfo` reads
    pub const MULTICALL2_ADDRESS: &str = "0x9aac9048fC8139667D6a2597B902865bfdc225d3";

    pub const HOMORA_BANK_NAME: &str = "HomoraBank";
    pub const MULTICALL2_NAME: &str = "Multicall2";
}

/// Batching and output defaults
pub mod system {
    /// Maximum number of sub-calls bundled into one `aggregate` invocation
    pub const MAX_CHUNK: usize = 100;
    /// Snapshot destination, relative to the working directory
    pub const DEFAULT_OUTPUT_PATH: &str = "data/positions.json";
    /// Optional configuration file looked up in the working directory
    pub const CONFIG_FILE_NAME: &str = "position-snapshot.toml";
    /// Prefix for environment variable overrides (`POSITIONS_RPC_URL`, ...)
    pub const ENV_PREFIX: &str = "POSITIONS";
}
