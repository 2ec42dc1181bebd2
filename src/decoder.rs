//! Decoding of raw `getPositionInfo` payloads into position records.

use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;

use crate::contracts::IHomoraBank;
use crate::error::{SnapshotError, SnapshotResult};
use crate::snapshot::PositionRecord;

/// Decode the payload returned for `position_id` and keep its owner.
pub fn decode_position_owner(position_id: u64, payload: &[u8]) -> SnapshotResult<PositionRecord> {
    let info = IHomoraBank::getPositionInfoCall::abi_decode_returns(payload, true)
        .map_err(|e| SnapshotError::decode_error(position_id, e))?;

    Ok(PositionRecord {
        position_id,
        owner: info.owner.to_checksum(None),
    })
}

/// Decode payloads for consecutive position ids starting at 1.
///
/// The first malformed payload aborts decoding; no partial map is returned.
pub fn decode_owner_map(payloads: &[Bytes]) -> SnapshotResult<Vec<PositionRecord>> {
    payloads
        .iter()
        .zip(1u64..)
        .map(|(payload, position_id)| decode_position_owner(position_id, payload))
        .collect()
}
