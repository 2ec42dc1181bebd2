//! # Snapshot Error Types
//!
//! Unified error handling for the position snapshot pipeline. No variant is
//! recovered locally: every failure propagates to the caller of the run and
//! aborts it before the snapshot file is touched.

use thiserror::Error;

/// Snapshot operation result type
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error types for snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Contract unavailable: {contract} at '{address}'")]
    ContractUnavailable { contract: String, address: String },

    #[error("RPC transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Contract call failed: {operation} - {reason}")]
    CallFailed { operation: String, reason: String },

    #[error("Failed to decode position {position_id}: {reason}")]
    DecodeError { position_id: u64, reason: String },

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SnapshotError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Report that a required contract handle could not be constructed
    pub fn contract_unavailable(contract: impl Into<String>, address: impl Into<String>) -> Self {
        Self::ContractUnavailable {
            contract: contract.into(),
            address: address.into(),
        }
    }

    /// Create a call failure for a named remote operation
    pub fn call_failed(operation: impl Into<String>, reason: impl ToString) -> Self {
        Self::CallFailed {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode_error(position_id: u64, reason: impl ToString) -> Self {
        Self::DecodeError {
            position_id,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid response error for protocol violations
    ///
    /// Use this when a remote call returns a payload whose shape does not
    /// match what was requested, e.g. an aggregate call answering fewer
    /// sub-calls than it was given.
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
