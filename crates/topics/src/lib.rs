//! Precomputed Ethereum event log topics.
//!
//! Every constant is the keccak-256 hash of a canonical event signature, the
//! value a contract writes as `topics[0]` of the log it emits. Topics are
//! grouped by the contract interface that declares the event.
//!
//! ```
//! use evtopics::{EventTopic, TopicGroup, TRANSFER_TOPIC};
//!
//! let transfer = EventTopic::from_name("Transfer").unwrap();
//! assert_eq!(transfer.hash(), TRANSFER_TOPIC);
//! assert_eq!(transfer.group(), TopicGroup::StandardToken);
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod group;
pub mod multisig;
pub mod ownable;
pub mod snmt;
pub mod standard_token;
pub mod table;
pub mod topic;

pub use alloy_primitives::{b256, keccak256, B256};
pub use group::{TopicGroup, UnknownTopicGroup};
pub use multisig::*;
pub use ownable::*;
pub use snmt::*;
pub use standard_token::*;
pub use table::TOPICS;
pub use topic::{EventTopic, UnknownTopic};
