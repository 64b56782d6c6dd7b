//! `Document`: one variant per collection, built from untyped JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use botledger_types::action::{Action, ActionType, Trigger};
use botledger_types::bot::{Bot, BotExecution, ExecutionError, TaskQueueStatus};
use botledger_types::collection::CollectionId;
use botledger_types::config::KeyEncoding;
use botledger_types::error::{KeyError, ValidationError};
use botledger_types::github::{GitHubEvent, GitHubObject, GitHubRepository};

use crate::keyed::Keyed;
use crate::registry::{require_key_fields, CollectionSchema};

/// A typed document from any collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "collection", content = "document")]
pub enum Document {
    #[serde(rename = "Bot")]
    Bot(Bot),
    #[serde(rename = "Bot_Execution")]
    BotExecution(BotExecution),
    #[serde(rename = "Task_Queue_Status")]
    TaskQueueStatus(TaskQueueStatus),
    #[serde(rename = "Error")]
    Error(ExecutionError),
    #[serde(rename = "Trigger")]
    Trigger(Trigger),
    #[serde(rename = "Action")]
    Action(Action),
    #[serde(rename = "Action_Type")]
    ActionType(ActionType),
    #[serde(rename = "GitHub_Event")]
    GitHubEvent(GitHubEvent),
    #[serde(rename = "GitHub_Repository")]
    GitHubRepository(GitHubRepository),
    #[serde(rename = "GitHub_Object")]
    GitHubObject(GitHubObject),
}

fn typed<T>(collection: CollectionId, value: Value) -> Result<T, ValidationError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_value(value).map_err(|e| ValidationError::Malformed {
        collection: collection.to_string(),
        reason: e.to_string(),
    })
}

impl Document {
    /// Build a typed document for `collection` from JSON.
    ///
    /// Key-field presence is checked first and fails exactly as key
    /// derivation does; the remaining fields are then checked by
    /// deserializing into the collection's record type.
    pub fn from_value(collection: CollectionId, value: Value) -> Result<Self, ValidationError> {
        require_key_fields(&CollectionSchema::of(collection), &value)?;

        let doc = match collection {
            CollectionId::Bot => Document::Bot(typed(collection, value)?),
            CollectionId::BotExecution => Document::BotExecution(typed(collection, value)?),
            CollectionId::TaskQueueStatus => Document::TaskQueueStatus(typed(collection, value)?),
            CollectionId::Error => Document::Error(typed(collection, value)?),
            CollectionId::Trigger => Document::Trigger(typed(collection, value)?),
            CollectionId::Action => Document::Action(typed(collection, value)?),
            CollectionId::ActionType => Document::ActionType(typed(collection, value)?),
            CollectionId::GitHubEvent => Document::GitHubEvent(typed(collection, value)?),
            CollectionId::GitHubRepository => {
                Document::GitHubRepository(typed(collection, value)?)
            }
            CollectionId::GitHubObject => Document::GitHubObject(typed(collection, value)?),
        };
        Ok(doc)
    }

    /// Like [`Document::from_value`], with the collection given as a token.
    pub fn parse(collection: &str, value: Value) -> Result<Self, KeyError> {
        let collection: CollectionId = collection.parse()?;
        Ok(Self::from_value(collection, value)?)
    }

    pub fn collection(&self) -> CollectionId {
        match self {
            Document::Bot(_) => Bot::COLLECTION,
            Document::BotExecution(_) => BotExecution::COLLECTION,
            Document::TaskQueueStatus(_) => TaskQueueStatus::COLLECTION,
            Document::Error(_) => ExecutionError::COLLECTION,
            Document::Trigger(_) => Trigger::COLLECTION,
            Document::Action(_) => Action::COLLECTION,
            Document::ActionType(_) => ActionType::COLLECTION,
            Document::GitHubEvent(_) => GitHubEvent::COLLECTION,
            Document::GitHubRepository(_) => GitHubRepository::COLLECTION,
            Document::GitHubObject(_) => GitHubObject::COLLECTION,
        }
    }

    pub fn primary_key(&self) -> String {
        self.primary_key_with(KeyEncoding::Joined)
    }

    pub fn primary_key_with(&self, encoding: KeyEncoding) -> String {
        match self {
            Document::Bot(d) => d.primary_key_with(encoding),
            Document::BotExecution(d) => d.primary_key_with(encoding),
            Document::TaskQueueStatus(d) => d.primary_key_with(encoding),
            Document::Error(d) => d.primary_key_with(encoding),
            Document::Trigger(d) => d.primary_key_with(encoding),
            Document::Action(d) => d.primary_key_with(encoding),
            Document::ActionType(d) => d.primary_key_with(encoding),
            Document::GitHubEvent(d) => d.primary_key_with(encoding),
            Document::GitHubRepository(d) => d.primary_key_with(encoding),
            Document::GitHubObject(d) => d.primary_key_with(encoding),
        }
    }

    /// The record's own JSON, without the collection tag.
    pub fn to_record_value(&self) -> serde_json::Result<Value> {
        match self {
            Document::Bot(d) => serde_json::to_value(d),
            Document::BotExecution(d) => serde_json::to_value(d),
            Document::TaskQueueStatus(d) => serde_json::to_value(d),
            Document::Error(d) => serde_json::to_value(d),
            Document::Trigger(d) => serde_json::to_value(d),
            Document::Action(d) => serde_json::to_value(d),
            Document::ActionType(d) => serde_json::to_value(d),
            Document::GitHubEvent(d) => serde_json::to_value(d),
            Document::GitHubRepository(d) => serde_json::to_value(d),
            Document::GitHubObject(d) => serde_json::to_value(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botledger_types::github::OwnerType;
    use serde_json::json;

    #[test]
    fn test_from_value_builds_typed_record() {
        let doc = Document::from_value(
            CollectionId::GitHubRepository,
            json!({"repo_name": "repo1", "owner_name": "octo", "owner_type": "Organization"}),
        )
        .unwrap();
        assert_eq!(doc.collection(), CollectionId::GitHubRepository);
        assert_eq!(doc.primary_key(), "repo1_octo");
        match doc {
            Document::GitHubRepository(repo) => {
                assert_eq!(repo.owner_type, OwnerType::Organization)
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_field_matches_dynamic_error() {
        let err = Document::from_value(CollectionId::Error, json!({"execution_id": "abc123"}))
            .unwrap_err();
        let dynamic = crate::get_primary_key(&json!({"execution_id": "abc123"}), "Error")
            .unwrap_err();
        assert_eq!(KeyError::Validation(err), dynamic);
    }

    #[test]
    fn test_missing_non_key_field_is_malformed() {
        // `message` is required on Error records but is not a key field.
        let err = Document::from_value(
            CollectionId::Error,
            json!({"execution_id": "abc123", "timestamp": 1000}),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }));
    }

    #[test]
    fn test_missing_owner_type_is_malformed() {
        let err = Document::from_value(
            CollectionId::GitHubRepository,
            json!({"repo_name": "repo1", "owner_name": "octo"}),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }));

        // The key itself does not depend on owner_type.
        assert_eq!(
            crate::get_primary_key(&json!({"repo_name": "repo1", "owner_name": "octo"}), "GitHub_Repository")
                .unwrap(),
            "repo1_octo"
        );
    }

    #[test]
    fn test_missing_execution_status_is_malformed() {
        let err = Document::from_value(
            CollectionId::BotExecution,
            json!({"execution_id": "abc123", "bot_name": "merge-bot", "start_time": 1000}),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }));

        let doc = Document::from_value(
            CollectionId::BotExecution,
            json!({
                "execution_id": "abc123",
                "bot_name": "merge-bot",
                "status": "queued",
                "start_time": 1000,
            }),
        )
        .unwrap();
        assert_eq!(doc.primary_key(), "abc123");
    }

    #[test]
    fn test_wrong_key_type_is_malformed() {
        let err = Document::from_value(
            CollectionId::TaskQueueStatus,
            json!({"queue_name": "default", "timestamp": "noon"}),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Document::from_value(CollectionId::Bot, json!("merge-bot")).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnObject { .. }));
    }

    #[test]
    fn test_parse_unknown_collection() {
        let err = Document::parse("NotACollection", json!({"bot_name": "x"})).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_tagged_serde_roundtrip() {
        let doc = Document::parse("Bot", json!({"bot_name": "merge-bot"})).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["collection"], "Bot");
        assert_eq!(json["document"]["bot_name"], "merge-bot");
        let parsed: Document = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_record_value_keys_like_document() {
        let doc = Document::parse(
            "Action",
            json!({"execution_id": "abc123", "action_type": "merge", "timestamp": 1000}),
        )
        .unwrap();
        let record = doc.to_record_value().unwrap();
        assert_eq!(
            crate::get_primary_key(&record, doc.collection().as_str()).unwrap(),
            doc.primary_key()
        );
    }
}
