//! ERC-20 standard token events.
use alloy_primitives::{b256, B256};

/// Canonical signature of the ERC-20 `Transfer` event.
pub const TRANSFER_SIGNATURE: &str = "Transfer(address,address,uint256)";

/// `keccak256("Transfer(address,address,uint256)")`
pub const TRANSFER_TOPIC: B256 =
    b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// Canonical signature of the ERC-20 `Approval` event.
pub const APPROVAL_SIGNATURE: &str = "Approval(address,address,uint256)";

/// `keccak256("Approval(address,address,uint256)")`
pub const APPROVAL_TOPIC: B256 =
    b256!("0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925");
