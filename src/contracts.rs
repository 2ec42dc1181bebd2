//! # Contract Bindings
//!
//! ABI bindings for the two contracts the snapshot reads, plus address
//! validation used before any contract handle is constructed.
//!
//! Only the functions the pipeline calls are declared. `getPositionInfo`
//! returns the full HomoraBank tuple so payloads decode against the real
//! return shape even though only `owner` is kept.

use alloy::primitives::Address;
use alloy::sol;
use tracing::error;

sol! {
    #[sol(rpc, all_derives)]
    interface IHomoraBank {
        function nextPositionId() external view returns (uint256);

        function getPositionInfo(uint256 positionId)
            external
            view
            returns (address owner, address collToken, uint256 collId, uint256 collateralSize);
    }
}

sol! {
    #[sol(rpc, all_derives)]
    interface IMulticall2 {
        #[derive(Debug, PartialEq, Eq)]
        struct Call {
            address target;
            bytes callData;
        }

        function aggregate(Call[] memory calls)
            external
            returns (uint256 blockNumber, bytes[] memory returnData);
    }
}

/// Parse and validate a contract address.
///
/// Mixed-case input must carry a valid EIP-55 checksum; all-lowercase or
/// all-uppercase hex is accepted as-is. The zero address is never a valid
/// contract. Returns `None` (after logging why) instead of failing, so the
/// caller decides whether absence is fatal.
pub fn contract_address(raw: &str) -> Option<Address> {
    match parse_address(raw) {
        Ok(address) if address == Address::ZERO => {
            error!(address = %raw, "Failed to get contract: zero address");
            None
        }
        Ok(address) => Some(address),
        Err(reason) => {
            error!(address = %raw, reason = %reason, "Failed to get contract");
            None
        }
    }
}

fn parse_address(raw: &str) -> Result<Address, String> {
    let trimmed = raw.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let mixed_case = hex.chars().any(|c| c.is_ascii_lowercase())
        && hex.chars().any(|c| c.is_ascii_uppercase());

    if mixed_case {
        Address::parse_checksummed(trimmed, None).map_err(|e| e.to_string())
    } else {
        trimmed.parse::<Address>().map_err(|e| e.to_string())
    }
}
