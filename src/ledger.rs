//! # Position Ledger Abstraction
//!
//! The pipeline talks to the chain only through [`PositionLedger`]. The
//! production implementation, [`RpcLedger`], issues `eth_call`s against a
//! HomoraBank and a Multicall2 deployment; tests substitute an in-memory
//! ledger.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::transports::BoxTransport;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::config::SnapshotConfig;
use crate::constants::contracts::{HOMORA_BANK_NAME, MULTICALL2_NAME};
use crate::contracts::{contract_address, IHomoraBank, IMulticall2};
use crate::error::{SnapshotError, SnapshotResult};

/// Read access to a lending ledger and its aggregation contract.
#[async_trait]
pub trait PositionLedger: Send + Sync {
    /// Address every per-position request targets.
    fn ledger_address(&self) -> Address;

    /// Read the ledger's next position id (the number of positions issued).
    async fn next_position_id(&self) -> SnapshotResult<U256>;

    /// Execute `calls` in one round trip, returning one raw payload per call
    /// in the same order. Fails as a unit if any sub-call fails.
    async fn aggregate(&self, calls: Vec<IMulticall2::Call>) -> SnapshotResult<Vec<Bytes>>;
}

/// [`PositionLedger`] backed by a JSON-RPC provider.
#[derive(Debug, Clone)]
pub struct RpcLedger<P> {
    provider: P,
    bank: Address,
    multicall: Address,
}

impl<P> RpcLedger<P> {
    pub fn new(provider: P, bank: Address, multicall: Address) -> Self {
        Self {
            provider,
            bank,
            multicall,
        }
    }
}

impl RpcLedger<RootProvider<BoxTransport>> {
    /// Resolve both contract addresses and connect to the configured endpoint.
    ///
    /// Either address failing validation halts here with
    /// [`SnapshotError::ContractUnavailable`]; no network traffic is issued
    /// in that case.
    pub async fn connect(config: &SnapshotConfig) -> SnapshotResult<Self> {
        let bank = contract_address(&config.bank_address).ok_or_else(|| {
            SnapshotError::contract_unavailable(HOMORA_BANK_NAME, &config.bank_address)
        })?;
        let multicall = contract_address(&config.multicall_address).ok_or_else(|| {
            SnapshotError::contract_unavailable(MULTICALL2_NAME, &config.multicall_address)
        })?;

        let provider = ProviderBuilder::new().on_builtin(&config.rpc_url).await?;

        info!(
            rpc_url = %config.rpc_url,
            bank = %bank,
            multicall = %multicall,
            "Connected to ledger"
        );

        Ok(Self::new(provider, bank, multicall))
    }
}

#[async_trait]
impl<P> PositionLedger for RpcLedger<P>
where
    P: Provider + Send + Sync,
{
    fn ledger_address(&self) -> Address {
        self.bank
    }

    #[instrument(skip(self), fields(bank = %self.bank))]
    async fn next_position_id(&self) -> SnapshotResult<U256> {
        let bank = IHomoraBank::new(self.bank, &self.provider);
        let result = bank
            .nextPositionId()
            .call()
            .await
            .map_err(|e| SnapshotError::call_failed("nextPositionId", e))?;
        Ok(result._0)
    }

    #[instrument(skip(self, calls), fields(calls = calls.len()))]
    async fn aggregate(&self, calls: Vec<IMulticall2::Call>) -> SnapshotResult<Vec<Bytes>> {
        let multicall = IMulticall2::new(self.multicall, &self.provider);
        let result = multicall
            .aggregate(calls)
            .call()
            .await
            .map_err(|e| SnapshotError::call_failed("aggregate", e))?;

        debug!(
            block_number = %result.blockNumber,
            payloads = result.returnData.len(),
            "Aggregate call returned"
        );
        Ok(result.returnData)
    }
}
