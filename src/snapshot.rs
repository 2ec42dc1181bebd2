//! # Position Snapshot Document
//!
//! The persisted artifact of a run: the ledger's position count and the
//! owner of every position id, in ascending id order.
//!
//! The document is rebuilt from scratch on every run and overwrites the
//! previous file unconditionally. Field order is fixed by the struct
//! definitions, so identical ledger state yields byte-identical output.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::SnapshotResult;

/// Owner of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    #[serde(rename = "positionID")]
    pub position_id: u64,
    pub owner: String,
}

/// Point-in-time owner map of every position in the ledger.
///
/// ```rust
/// use position_snapshot::snapshot::{PositionRecord, PositionSnapshot};
///
/// let snapshot = PositionSnapshot::new(1, vec![PositionRecord {
///     position_id: 1,
///     owner: "0x0000000000000000000000000000000000000001".to_string(),
/// }]);
/// assert!(snapshot.to_pretty_json().unwrap().starts_with("{\n  \"nextPositionID\": 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    #[serde(rename = "nextPositionID")]
    pub next_position_id: u64,
    #[serde(rename = "ownerMap")]
    pub owner_map: Vec<PositionRecord>,
}

impl PositionSnapshot {
    pub fn new(next_position_id: u64, owner_map: Vec<PositionRecord>) -> Self {
        Self {
            next_position_id,
            owner_map,
        }
    }

    /// Number of positions recorded in the owner map
    pub fn len(&self) -> usize {
        self.owner_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner_map.is_empty()
    }

    /// Render as JSON with two-space indentation
    pub fn to_pretty_json(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Overwrite `path` with this snapshot, creating parent directories.
    ///
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub async fn write_to(&self, path: &Path) -> SnapshotResult<()> {
        let contents = self.to_pretty_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents.as_bytes()).await?;

        info!(
            path = %path.display(),
            next_position_id = self.next_position_id,
            positions = self.owner_map.len(),
            "Snapshot written"
        );
        Ok(())
    }

    /// Load a previously written snapshot
    pub async fn read_from(path: &Path) -> SnapshotResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}
