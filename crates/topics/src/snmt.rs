//! SNMT token events.
//!
//! SNMT emits `GiveAway` when tokens are handed out by the owner, on top of the
//! standard token events.
use alloy_primitives::{b256, B256};

/// Canonical signature of the `GiveAway` event.
pub const GIVE_AWAY_SIGNATURE: &str = "GiveAway(address,uint256)";

/// `keccak256("GiveAway(address,uint256)")`
pub const GIVE_AWAY_TOPIC: B256 =
    b256!("0xe08e9d066634006283658128ec91f58d444719d7a07d49f72924da4352ff94ad");
