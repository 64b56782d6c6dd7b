//! Collection identifiers and the per-collection primary-key table.
//!
//! The ten collection tokens are part of the storage contract: documents
//! are filed under these exact names, and each collection's key fields are
//! joined in the order declared here. Reordering an entry changes every key
//! previously written to that collection.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// The closed set of collections in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CollectionId {
    #[serde(rename = "Bot")]
    Bot,
    #[serde(rename = "Bot_Execution")]
    BotExecution,
    #[serde(rename = "Task_Queue_Status")]
    TaskQueueStatus,
    #[serde(rename = "Error")]
    Error,
    #[serde(rename = "Trigger")]
    Trigger,
    #[serde(rename = "Action")]
    Action,
    #[serde(rename = "Action_Type")]
    ActionType,
    #[serde(rename = "GitHub_Event")]
    GitHubEvent,
    #[serde(rename = "GitHub_Repository")]
    GitHubRepository,
    #[serde(rename = "GitHub_Object")]
    GitHubObject,
}

/// A documentation-only foreign key: `field` is expected to hold the
/// primary key of a document in `target`. Nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub field: &'static str,
    pub target: CollectionId,
}

impl ForeignKey {
    const fn new(field: &'static str, target: CollectionId) -> Self {
        Self { field, target }
    }
}

impl CollectionId {
    /// Every collection, in declaration order.
    pub const ALL: [CollectionId; 10] = [
        CollectionId::Bot,
        CollectionId::BotExecution,
        CollectionId::TaskQueueStatus,
        CollectionId::Error,
        CollectionId::Trigger,
        CollectionId::Action,
        CollectionId::ActionType,
        CollectionId::GitHubEvent,
        CollectionId::GitHubRepository,
        CollectionId::GitHubObject,
    ];

    /// The wire token used as the collection name in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionId::Bot => "Bot",
            CollectionId::BotExecution => "Bot_Execution",
            CollectionId::TaskQueueStatus => "Task_Queue_Status",
            CollectionId::Error => "Error",
            CollectionId::Trigger => "Trigger",
            CollectionId::Action => "Action",
            CollectionId::ActionType => "Action_Type",
            CollectionId::GitHubEvent => "GitHub_Event",
            CollectionId::GitHubRepository => "GitHub_Repository",
            CollectionId::GitHubObject => "GitHub_Object",
        }
    }

    /// Ordered field names whose values make up the primary key.
    ///
    /// Never empty. The order mirrors the declared column order, not
    /// alphabetical order.
    pub fn key_fields(&self) -> &'static [&'static str] {
        match self {
            CollectionId::Bot => &["bot_name"],
            CollectionId::BotExecution => &["execution_id"],
            CollectionId::TaskQueueStatus => &["queue_name", "timestamp"],
            CollectionId::Error => &["execution_id", "timestamp"],
            CollectionId::Trigger => &["execution_id"],
            CollectionId::Action => &["execution_id", "action_type", "timestamp"],
            CollectionId::ActionType => &["name"],
            CollectionId::GitHubEvent => &["payload_hash"],
            CollectionId::GitHubRepository => &["repo_name", "owner_name"],
            CollectionId::GitHubObject => &["object_type", "repository", "object_id"],
        }
    }

    /// Foreign keys declared by documents in this collection.
    pub fn references(&self) -> &'static [ForeignKey] {
        const BOT_EXECUTION: &[ForeignKey] = &[ForeignKey::new("bot_name", CollectionId::Bot)];
        const ERROR: &[ForeignKey] =
            &[ForeignKey::new("execution_id", CollectionId::BotExecution)];
        const TRIGGER: &[ForeignKey] = &[
            ForeignKey::new("execution_id", CollectionId::BotExecution),
            ForeignKey::new("github_event", CollectionId::GitHubEvent),
        ];
        const ACTION: &[ForeignKey] = &[
            ForeignKey::new("execution_id", CollectionId::BotExecution),
            ForeignKey::new("action_type", CollectionId::ActionType),
            ForeignKey::new("destination_object", CollectionId::GitHubObject),
            ForeignKey::new("destination_repo", CollectionId::GitHubRepository),
        ];
        const GITHUB_EVENT: &[ForeignKey] =
            &[ForeignKey::new("repository", CollectionId::GitHubRepository)];
        const GITHUB_OBJECT: &[ForeignKey] =
            &[ForeignKey::new("repository", CollectionId::GitHubRepository)];

        match self {
            CollectionId::BotExecution => BOT_EXECUTION,
            CollectionId::Error => ERROR,
            CollectionId::Trigger => TRIGGER,
            CollectionId::Action => ACTION,
            CollectionId::GitHubEvent => GITHUB_EVENT,
            CollectionId::GitHubObject => GITHUB_OBJECT,
            CollectionId::Bot
            | CollectionId::TaskQueueStatus
            | CollectionId::ActionType
            | CollectionId::GitHubRepository => &[],
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionId {
    type Err = ConfigurationError;

    /// Tokens are matched exactly; `bot_execution` is not `Bot_Execution`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_token_roundtrip() {
        for collection in CollectionId::ALL {
            let parsed: CollectionId = collection.to_string().parse().unwrap();
            assert_eq!(collection, parsed);
        }
    }

    #[test]
    fn test_collection_parse_is_case_sensitive() {
        assert!("bot".parse::<CollectionId>().is_err());
        assert!("Bot Execution".parse::<CollectionId>().is_err());
        assert!("NotACollection".parse::<CollectionId>().is_err());
    }

    #[test]
    fn test_every_collection_has_key_fields() {
        for collection in CollectionId::ALL {
            assert!(
                !collection.key_fields().is_empty(),
                "{collection} has no key fields"
            );
        }
    }

    #[test]
    fn test_key_field_order_is_declared_order() {
        assert_eq!(
            CollectionId::Action.key_fields(),
            &["execution_id", "action_type", "timestamp"]
        );
        assert_eq!(
            CollectionId::GitHubObject.key_fields(),
            &["object_type", "repository", "object_id"]
        );
        assert_eq!(
            CollectionId::GitHubRepository.key_fields(),
            &["repo_name", "owner_name"]
        );
    }

    #[test]
    fn test_action_references() {
        let targets: Vec<_> = CollectionId::Action
            .references()
            .iter()
            .map(|fk| (fk.field, fk.target))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("execution_id", CollectionId::BotExecution),
                ("action_type", CollectionId::ActionType),
                ("destination_object", CollectionId::GitHubObject),
                ("destination_repo", CollectionId::GitHubRepository),
            ]
        );
        assert!(CollectionId::Bot.references().is_empty());
    }

    #[test]
    fn test_collection_serde_uses_tokens() {
        let json = serde_json::to_string(&CollectionId::TaskQueueStatus).unwrap();
        assert_eq!(json, "\"Task_Queue_Status\"");
        let parsed: CollectionId = serde_json::from_str("\"GitHub_Event\"").unwrap();
        assert_eq!(parsed, CollectionId::GitHubEvent);
    }
}
