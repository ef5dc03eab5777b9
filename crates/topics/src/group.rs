//! Contract interfaces that topics are grouped by.
use crate::{table::TOPICS, topic::EventTopic};
use core::{fmt, str::FromStr};

/// Contract interface that declares an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopicGroup {
    /// ERC-20 standard token.
    StandardToken,
    /// Ownable contract with a single transferable owner.
    Ownable,
    /// SNMT token extension.
    #[cfg_attr(feature = "serde", serde(rename = "SNMT"))]
    Snmt,
    /// Multi-signature wallet.
    MultiSig,
}

/// String identifiers for topic groups.
pub mod name {
    /// String identifier for the standard token group
    pub const STANDARD_TOKEN: &str = "StandardToken";
    /// String identifier for the ownable group
    pub const OWNABLE: &str = "Ownable";
    /// String identifier for the SNMT group
    pub const SNMT: &str = "SNMT";
    /// String identifier for the multi-signature wallet group
    pub const MULTI_SIG: &str = "MultiSig";
}

impl TopicGroup {
    /// All groups in table order.
    pub const ALL: [Self; 4] = [Self::StandardToken, Self::Ownable, Self::Snmt, Self::MultiSig];

    /// Returns the string identifier of the group.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StandardToken => name::STANDARD_TOKEN,
            Self::Ownable => name::OWNABLE,
            Self::Snmt => name::SNMT,
            Self::MultiSig => name::MULTI_SIG,
        }
    }

    /// Returns the topics declared by this group, in table order.
    pub fn topics(self) -> impl Iterator<Item = &'static EventTopic> {
        TOPICS.iter().filter(move |topic| topic.group() == self)
    }
}

/// Error type for unknown group names. Returned by [`TopicGroup::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownTopicGroup;

impl fmt::Display for UnknownTopicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown topic group")
    }
}

impl core::error::Error for UnknownTopicGroup {}

impl FromStr for TopicGroup {
    type Err = UnknownTopicGroup;

    /// Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownTopicGroup)
    }
}

impl From<TopicGroup> for &'static str {
    fn from(group: TopicGroup) -> Self {
        group.as_str()
    }
}

impl fmt::Display for TopicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
