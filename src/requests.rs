//! Per-position read requests.

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;

use crate::contracts::{IHomoraBank, IMulticall2};

/// A single `getPositionInfo(position_id)` read addressed to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRequest {
    pub position_id: u64,
    pub call: IMulticall2::Call,
}

impl PositionRequest {
    pub fn new(target: Address, position_id: u64) -> Self {
        let call_data = IHomoraBank::getPositionInfoCall {
            positionId: U256::from(position_id),
        }
        .abi_encode();

        Self {
            position_id,
            call: IMulticall2::Call {
                target,
                callData: call_data.into(),
            },
        }
    }
}

/// Build one request for every position id in `1..=count`, ascending.
pub fn build_position_requests(target: Address, count: u64) -> Vec<PositionRequest> {
    (1..=count)
        .map(|position_id| PositionRequest::new(target, position_id))
        .collect()
}
