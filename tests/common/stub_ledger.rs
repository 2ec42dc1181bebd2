use alloy::primitives::{address, Address, Bytes, U256};
use alloy::sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use parking_lot::Mutex;
use position_snapshot::contracts::{IHomoraBank, IMulticall2};
use position_snapshot::{PositionLedger, SnapshotError, SnapshotResult};

pub const STUB_BANK: Address = address!("827cCeA3D460D458393EEAfE831698d83FE47BA7");

/// In-memory ledger for testing the snapshot pipeline
///
/// Answers `getPositionInfo` from a fixed owner list (position id `n` is
/// owned by `owners[n - 1]`) and records the size of every aggregate call.
#[derive(Debug)]
pub struct StubLedger {
    pub owners: Vec<Address>,
    /// Any aggregate call containing this position id reverts
    pub failing_position: Option<u64>,
    /// Fail the count read itself
    pub fail_count: bool,
    aggregate_sizes: Mutex<Vec<usize>>,
}

impl StubLedger {
    pub fn new(owners: Vec<Address>) -> Self {
        Self {
            owners,
            failing_position: None,
            fail_count: false,
            aggregate_sizes: Mutex::new(Vec::new()),
        }
    }

    /// Ledger with `count` positions owned by distinct deterministic addresses
    pub fn with_positions(count: u64) -> Self {
        Self::new((1..=count).map(owner_for).collect())
    }

    pub fn failing_at(mut self, position_id: u64) -> Self {
        self.failing_position = Some(position_id);
        self
    }

    /// Sizes of every aggregate call issued, sorted (completion order varies)
    pub fn aggregate_sizes(&self) -> Vec<usize> {
        let mut sizes = self.aggregate_sizes.lock().clone();
        sizes.sort_unstable();
        sizes
    }

    fn position_info(&self, call: &IMulticall2::Call) -> SnapshotResult<Bytes> {
        let decoded = IHomoraBank::getPositionInfoCall::abi_decode(&call.callData, true)
            .map_err(|e| SnapshotError::call_failed("aggregate", e))?;
        let position_id = u64::try_from(decoded.positionId)
            .map_err(|e| SnapshotError::call_failed("aggregate", e))?;

        if self.failing_position == Some(position_id) {
            return Err(SnapshotError::call_failed(
                "aggregate",
                format!("execution reverted for position {position_id}"),
            ));
        }

        let owner = position_id
            .checked_sub(1)
            .and_then(|idx| self.owners.get(idx as usize))
            .copied()
            .unwrap_or(Address::ZERO);

        Ok((owner, Address::ZERO, U256::ZERO, U256::from(position_id * 1_000))
            .abi_encode_params()
            .into())
    }
}

#[async_trait]
impl PositionLedger for StubLedger {
    fn ledger_address(&self) -> Address {
        STUB_BANK
    }

    async fn next_position_id(&self) -> SnapshotResult<U256> {
        if self.fail_count {
            return Err(SnapshotError::call_failed("nextPositionId", "connection refused"));
        }
        Ok(U256::from(self.owners.len() as u64))
    }

    async fn aggregate(&self, calls: Vec<IMulticall2::Call>) -> SnapshotResult<Vec<Bytes>> {
        self.aggregate_sizes.lock().push(calls.len());
        // yield so chunks interleave like real network calls
        tokio::task::yield_now().await;
        calls.iter().map(|call| self.position_info(call)).collect()
    }
}

/// Deterministic, distinct owner for a position id
pub fn owner_for(position_id: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[12..].copy_from_slice(&position_id.to_be_bytes());
    bytes[0] = 0xab;
    Address::from(bytes)
}
