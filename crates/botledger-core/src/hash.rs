//! PayloadHasher trait for identifying GitHub webhook payloads.
//!
//! Defined in botledger-core so event records can be built without coupling
//! to a specific hashing algorithm. The `Sha256PayloadHasher` adapter lives
//! in botledger-infra.

use serde_json::Value;

use botledger_types::config::KeyEncoding;
use botledger_types::github::GitHubEvent;

use crate::encoding::encode_key;

/// Abstraction over payload hashing.
///
/// The hash is the `GitHub_Event` primary key, so it must depend only on the
/// payload's content: identical payloads, including webhook redeliveries,
/// must hash identically.
pub trait PayloadHasher: Send + Sync {
    /// Compute a hex-encoded hash of the given payload.
    fn hash_payload(&self, payload: &Value) -> String;
}

/// Build a `GitHub_Event` record for a received payload.
pub fn event_from_payload(
    hasher: &dyn PayloadHasher,
    event_type: impl Into<String>,
    payload: Value,
) -> GitHubEvent {
    let repository = payload
        .pointer("/repository/name")
        .and_then(Value::as_str)
        .zip(
            payload
                .pointer("/repository/owner/login")
                .and_then(Value::as_str),
        )
        .map(|(repo, owner)| encode_key([repo, owner], KeyEncoding::Joined));

    GitHubEvent {
        payload_hash: hasher.hash_payload(&payload),
        event_type: event_type.into(),
        repository,
        delivery_id: None,
        received_at: None,
        payload: Some(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct LengthHasher;

    impl PayloadHasher for LengthHasher {
        fn hash_payload(&self, payload: &Value) -> String {
            format!("{:x}", payload.to_string().len())
        }
    }

    #[test]
    fn test_event_from_payload_links_repository() {
        let payload = json!({
            "action": "opened",
            "repository": {"name": "repo1", "owner": {"login": "octo"}},
        });
        let event = event_from_payload(&LengthHasher, "pull_request", payload.clone());
        assert_eq!(event.event_type, "pull_request");
        assert_eq!(event.payload_hash, LengthHasher.hash_payload(&payload));
        // Same key a GitHub_Repository record for repo1/octo gets.
        assert_eq!(event.repository.as_deref(), Some("repo1_octo"));
    }

    #[test]
    fn test_event_from_payload_without_repository() {
        let event = event_from_payload(&LengthHasher, "ping", json!({"zen": "Keep it simple."}));
        assert!(event.repository.is_none());
        assert!(event.payload.is_some());
    }
}
