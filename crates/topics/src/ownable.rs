//! Ownable contract events.
use alloy_primitives::{b256, B256};

/// Canonical signature of the `OwnershipTransferred` event.
pub const OWNERSHIP_TRANSFERRED_SIGNATURE: &str = "OwnershipTransferred(address,address)";

/// `keccak256("OwnershipTransferred(address,address)")`
pub const OWNERSHIP_TRANSFERRED_TOPIC: B256 =
    b256!("0x8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e0");
