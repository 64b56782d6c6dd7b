//! Primary keys for typed records.
//!
//! Each record type's key fields are non-optional members, so a typed
//! record always has a key. The result is byte-identical to what
//! [`KeyDeriver`](crate::KeyDeriver) produces for the record's JSON form.

use botledger_types::action::{Action, ActionType, Trigger};
use botledger_types::bot::{Bot, BotExecution, ExecutionError, TaskQueueStatus};
use botledger_types::collection::CollectionId;
use botledger_types::config::KeyEncoding;
use botledger_types::github::{GitHubEvent, GitHubObject, GitHubRepository};
use botledger_types::key::KeyValue;

use crate::encoding::encode_key;

/// A record that belongs to exactly one collection and can produce its key.
pub trait Keyed {
    const COLLECTION: CollectionId;

    /// Key-field values, in the order of `COLLECTION.key_fields()`.
    fn key_values(&self) -> Vec<KeyValue>;

    fn primary_key(&self) -> String {
        self.primary_key_with(KeyEncoding::Joined)
    }

    fn primary_key_with(&self, encoding: KeyEncoding) -> String {
        encode_key(
            self.key_values().iter().map(|v| v.to_string()),
            encoding,
        )
    }
}

impl Keyed for Bot {
    const COLLECTION: CollectionId = CollectionId::Bot;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.bot_name).into()]
    }
}

impl Keyed for BotExecution {
    const COLLECTION: CollectionId = CollectionId::BotExecution;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.execution_id).into()]
    }
}

impl Keyed for TaskQueueStatus {
    const COLLECTION: CollectionId = CollectionId::TaskQueueStatus;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.queue_name).into(), self.timestamp.into()]
    }
}

impl Keyed for ExecutionError {
    const COLLECTION: CollectionId = CollectionId::Error;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.execution_id).into(), self.timestamp.into()]
    }
}

impl Keyed for Trigger {
    const COLLECTION: CollectionId = CollectionId::Trigger;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.execution_id).into()]
    }
}

impl Keyed for Action {
    const COLLECTION: CollectionId = CollectionId::Action;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![
            (&self.execution_id).into(),
            (&self.action_type).into(),
            self.timestamp.into(),
        ]
    }
}

impl Keyed for ActionType {
    const COLLECTION: CollectionId = CollectionId::ActionType;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.name).into()]
    }
}

impl Keyed for GitHubEvent {
    const COLLECTION: CollectionId = CollectionId::GitHubEvent;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.payload_hash).into()]
    }
}

impl Keyed for GitHubRepository {
    const COLLECTION: CollectionId = CollectionId::GitHubRepository;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![(&self.repo_name).into(), (&self.owner_name).into()]
    }
}

impl Keyed for GitHubObject {
    const COLLECTION: CollectionId = CollectionId::GitHubObject;

    fn key_values(&self) -> Vec<KeyValue> {
        vec![
            (&self.object_type).into(),
            (&self.repository).into(),
            (&self.object_id).into(),
        ]
    }
}
