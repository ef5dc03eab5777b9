//! Multi-signature wallet events.
//!
//! Covers the transaction lifecycle (submission, confirmation, revocation,
//! execution), incoming deposits and owner set management.
use alloy_primitives::{b256, B256};

/// Canonical signature of the `Confirmation` event.
pub const CONFIRMATION_SIGNATURE: &str = "Confirmation(address,uint256)";

/// `keccak256("Confirmation(address,uint256)")`
pub const CONFIRMATION_TOPIC: B256 =
    b256!("0x4a504a94899432a9846e1aa406dceb1bcfd538bb839071d49d1e5e23f5be30ef");

/// Canonical signature of the `Revocation` event.
pub const REVOCATION_SIGNATURE: &str = "Revocation(address,uint256)";

/// `keccak256("Revocation(address,uint256)")`
pub const REVOCATION_TOPIC: B256 =
    b256!("0xf6a317157440607f36269043eb55f1287a5a19ba2216afeab88cd46cbcfb88e9");

/// Canonical signature of the `Submission` event.
pub const SUBMISSION_SIGNATURE: &str = "Submission(uint256)";

/// `keccak256("Submission(uint256)")`
pub const SUBMISSION_TOPIC: B256 =
    b256!("0xc0ba8fe4b176c1714197d43b9cc6bcf797a4a7461c5fe8d0ef6e184ae7601e51");

/// Canonical signature of the `Execution` event.
pub const EXECUTION_SIGNATURE: &str = "Execution(uint256)";

/// `keccak256("Execution(uint256)")`
pub const EXECUTION_TOPIC: B256 =
    b256!("0x33e13ecb54c3076d8e8bb8c2881800a4d972b792045ffae98fdf46df365fed75");

/// Canonical signature of the `ExecutionFailure` event.
pub const EXECUTION_FAILURE_SIGNATURE: &str = "ExecutionFailure(uint256)";

/// `keccak256("ExecutionFailure(uint256)")`
pub const EXECUTION_FAILURE_TOPIC: B256 =
    b256!("0x526441bb6c1aba3c9a4a6ca1d6545da9c2333c8c48343ef398eb858d72b79236");

/// Canonical signature of the `Deposit` event.
pub const DEPOSIT_SIGNATURE: &str = "Deposit(address,uint256)";

/// `keccak256("Deposit(address,uint256)")`
pub const DEPOSIT_TOPIC: B256 =
    b256!("0xe1fffcc4923d04b559f4d29a8bfc6cda04eb5b0d3c460751c2402c5c5cc9109c");

/// Canonical signature of the `OwnerAddition` event.
pub const OWNER_ADDITION_SIGNATURE: &str = "OwnerAddition(address)";

/// `keccak256("OwnerAddition(address)")`
pub const OWNER_ADDITION_TOPIC: B256 =
    b256!("0xf39e6e1eb0edcf53c221607b54b00cd28f3196fed0a24994dc308b8f611b682d");

/// Canonical signature of the `OwnerRemoval` event.
pub const OWNER_REMOVAL_SIGNATURE: &str = "OwnerRemoval(address)";

/// `keccak256("OwnerRemoval(address)")`
pub const OWNER_REMOVAL_TOPIC: B256 =
    b256!("0x8001553a916ef2f495d26a907cc54d96ed840d7bda71e73194bf5a9df7a76b90");

/// Canonical signature of the `RequirementChange` event.
pub const REQUIREMENT_CHANGE_SIGNATURE: &str = "RequirementChange(uint256)";

/// `keccak256("RequirementChange(uint256)")`
pub const REQUIREMENT_CHANGE_TOPIC: B256 =
    b256!("0xa3f1ee9126a074d9326c682f561767f710e927faa811f7a99829d49dc421797a");
