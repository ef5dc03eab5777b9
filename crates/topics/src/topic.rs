//! Event topic descriptor.
use crate::{group::TopicGroup, table::TOPICS};
use alloy_primitives::{keccak256, B256};
use core::{fmt, str::FromStr};

/// A named event topic together with the signature it is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventTopic {
    name: &'static str,
    signature: &'static str,
    group: TopicGroup,
    hash: B256,
}

impl EventTopic {
    /// Creates a new topic descriptor.
    ///
    /// `hash` is expected to be `keccak256(signature)`; this is not checked, use
    /// [`EventTopic::is_consistent`] for that.
    pub const fn new(
        name: &'static str,
        signature: &'static str,
        group: TopicGroup,
        hash: B256,
    ) -> Self {
        Self {
            name,
            signature,
            group,
            hash,
        }
    }

    /// Looks up a topic by its symbolic name (`TransferTopic`) or by the bare
    /// event name (`Transfer`).
    pub fn from_name(name: &str) -> Result<&'static Self, UnknownTopic> {
        TOPICS
            .iter()
            .find(|topic| topic.name == name || topic.event_name() == name)
            .ok_or(UnknownTopic)
    }

    /// Symbolic name of the topic, e.g. `TransferTopic`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Event name, the part of the signature before the parameter list.
    pub fn event_name(&self) -> &'static str {
        match self.signature.split_once('(') {
            Some((event, _)) => event,
            None => self.signature,
        }
    }

    /// Canonical event signature, e.g. `Transfer(address,address,uint256)`.
    #[inline]
    pub const fn signature(&self) -> &'static str {
        self.signature
    }

    /// Contract interface that declares the event.
    #[inline]
    pub const fn group(&self) -> TopicGroup {
        self.group
    }

    /// Stored 32-byte topic value.
    #[inline]
    pub const fn hash(&self) -> B256 {
        self.hash
    }

    /// Recomputes the topic as `keccak256(signature)`.
    pub fn compute_hash(&self) -> B256 {
        keccak256(self.signature.as_bytes())
    }

    /// Returns `true` if the stored hash matches the signature.
    pub fn is_consistent(&self) -> bool {
        self.compute_hash() == self.hash
    }
}

impl fmt::Display for EventTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.hash)
    }
}

/// Error type for unknown topic names. Returned by [`EventTopic::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownTopic;

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown topic")
    }
}

impl core::error::Error for UnknownTopic {}

impl FromStr for EventTopic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).copied()
    }
}
