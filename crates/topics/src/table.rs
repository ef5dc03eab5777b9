//! Full topic table.
use crate::{
    group::TopicGroup, multisig::*, ownable::*, snmt::*, standard_token::*, topic::EventTopic,
};

/// Every known topic, grouped by contract interface in [`TopicGroup::ALL`] order.
pub static TOPICS: [EventTopic; 13] = [
    // StandardToken
    EventTopic::new(
        "TransferTopic",
        TRANSFER_SIGNATURE,
        TopicGroup::StandardToken,
        TRANSFER_TOPIC,
    ),
    EventTopic::new(
        "ApprovalTopic",
        APPROVAL_SIGNATURE,
        TopicGroup::StandardToken,
        APPROVAL_TOPIC,
    ),
    // Ownable
    EventTopic::new(
        "OwnershipTransferredTopic",
        OWNERSHIP_TRANSFERRED_SIGNATURE,
        TopicGroup::Ownable,
        OWNERSHIP_TRANSFERRED_TOPIC,
    ),
    // SNMT
    EventTopic::new(
        "GiveAwayTopic",
        GIVE_AWAY_SIGNATURE,
        TopicGroup::Snmt,
        GIVE_AWAY_TOPIC,
    ),
    // MultiSig
    EventTopic::new(
        "ConfirmationTopic",
        CONFIRMATION_SIGNATURE,
        TopicGroup::MultiSig,
        CONFIRMATION_TOPIC,
    ),
    EventTopic::new(
        "RevocationTopic",
        REVOCATION_SIGNATURE,
        TopicGroup::MultiSig,
        REVOCATION_TOPIC,
    ),
    EventTopic::new(
        "SubmissionTopic",
        SUBMISSION_SIGNATURE,
        TopicGroup::MultiSig,
        SUBMISSION_TOPIC,
    ),
    EventTopic::new(
        "ExecutionTopic",
        EXECUTION_SIGNATURE,
        TopicGroup::MultiSig,
        EXECUTION_TOPIC,
    ),
    EventTopic::new(
        "ExecutionFailureTopic",
        EXECUTION_FAILURE_SIGNATURE,
        TopicGroup::MultiSig,
        EXECUTION_FAILURE_TOPIC,
    ),
    EventTopic::new(
        "DepositTopic",
        DEPOSIT_SIGNATURE,
        TopicGroup::MultiSig,
        DEPOSIT_TOPIC,
    ),
    EventTopic::new(
        "OwnerAdditionTopic",
        OWNER_ADDITION_SIGNATURE,
        TopicGroup::MultiSig,
        OWNER_ADDITION_TOPIC,
    ),
    EventTopic::new(
        "OwnerRemovalTopic",
        OWNER_REMOVAL_SIGNATURE,
        TopicGroup::MultiSig,
        OWNER_REMOVAL_TOPIC,
    ),
    EventTopic::new(
        "RequirementChangeTopic",
        REQUIREMENT_CHANGE_SIGNATURE,
        TopicGroup::MultiSig,
        REQUIREMENT_CHANGE_TOPIC,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, B256};
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case::transfer("TransferTopic", b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"))]
    #[case::approval("ApprovalTopic", b256!("0x8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"))]
    #[case::ownership_transferred("OwnershipTransferredTopic", b256!("0x8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e0"))]
    #[case::give_away("GiveAwayTopic", b256!("0xe08e9d066634006283658128ec91f58d444719d7a07d49f72924da4352ff94ad"))]
    #[case::confirmation("ConfirmationTopic", b256!("0x4a504a94899432a9846e1aa406dceb1bcfd538bb839071d49d1e5e23f5be30ef"))]
    #[case::revocation("RevocationTopic", b256!("0xf6a317157440607f36269043eb55f1287a5a19ba2216afeab88cd46cbcfb88e9"))]
    #[case::submission("SubmissionTopic", b256!("0xc0ba8fe4b176c1714197d43b9cc6bcf797a4a7461c5fe8d0ef6e184ae7601e51"))]
    #[case::execution("ExecutionTopic", b256!("0x33e13ecb54c3076d8e8bb8c2881800a4d972b792045ffae98fdf46df365fed75"))]
    #[case::execution_failure("ExecutionFailureTopic", b256!("0x526441bb6c1aba3c9a4a6ca1d6545da9c2333c8c48343ef398eb858d72b79236"))]
    #[case::deposit("DepositTopic", b256!("0xe1fffcc4923d04b559f4d29a8bfc6cda04eb5b0d3c460751c2402c5c5cc9109c"))]
    #[case::owner_addition("OwnerAdditionTopic", b256!("0xf39e6e1eb0edcf53c221607b54b00cd28f3196fed0a24994dc308b8f611b682d"))]
    #[case::owner_removal("OwnerRemovalTopic", b256!("0x8001553a916ef2f495d26a907cc54d96ed840d7bda71e73194bf5a9df7a76b90"))]
    #[case::requirement_change("RequirementChangeTopic", b256!("0xa3f1ee9126a074d9326c682f561767f710e927faa811f7a99829d49dc421797a"))]
    fn stored_value(#[case] name: &str, #[case] expected: B256) {
        let topic = TOPICS.iter().find(|topic| topic.name() == name).unwrap();
        assert_eq!(topic.hash(), expected);
    }

    #[test]
    fn values_are_distinct() {
        let hashes: HashSet<B256> = TOPICS.iter().map(EventTopic::hash).collect();
        assert_eq!(hashes.len(), TOPICS.len());
    }

    #[test]
    fn names_are_distinct() {
        let names: HashSet<&str> = TOPICS.iter().map(EventTopic::name).collect();
        assert_eq!(names.len(), TOPICS.len());
        let events: HashSet<&str> = TOPICS.iter().map(EventTopic::event_name).collect();
        assert_eq!(events.len(), TOPICS.len());
    }

    #[test]
    fn hashes_match_signatures() {
        for topic in &TOPICS {
            assert_eq!(topic.compute_hash(), topic.hash(), "{}", topic.signature());
        }
    }

    #[test]
    fn symbolic_name_is_event_name_with_suffix() {
        for topic in &TOPICS {
            assert_eq!(topic.name().strip_suffix("Topic"), Some(topic.event_name()));
        }
    }

    #[test]
    fn table_is_ordered_by_group() {
        let groups: Vec<TopicGroup> = TOPICS.iter().map(EventTopic::group).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first: Vec<B256> = TOPICS.iter().map(EventTopic::hash).collect();
        let second: Vec<B256> = TOPICS.iter().map(EventTopic::hash).collect();
        assert_eq!(first, second);
        assert_eq!(TOPICS[0].hash(), crate::TRANSFER_TOPIC);
    }
}
