//! SHA-256 payload hashing for `GitHub_Event` primary keys.
//!
//! Implements the `PayloadHasher` trait from `botledger-core` using the
//! `sha2` crate (RustCrypto ecosystem).

use serde_json::Value;
use sha2::{Digest, Sha256};

use botledger_core::hash::{event_from_payload, PayloadHasher};
use botledger_types::github::GitHubEvent;

/// SHA-256 implementation of `PayloadHasher`.
///
/// Hashes the compact JSON serialization of the payload and returns the
/// lowercase hex digest. Object keys serialize in sorted order, so two
/// payloads with the same content hash the same regardless of the key
/// order they arrived in.
pub struct Sha256PayloadHasher;

impl Sha256PayloadHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256PayloadHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadHasher for Sha256PayloadHasher {
    fn hash_payload(&self, payload: &Value) -> String {
        let digest = Sha256::digest(payload.to_string().as_bytes());
        format!("{:x}", digest)
    }
}

/// Hex SHA-256 of a webhook payload: the `GitHub_Event` primary key.
pub fn payload_hash(payload: &Value) -> String {
    Sha256PayloadHasher.hash_payload(payload)
}

/// Builds a `GitHub_Event` record keyed by [`payload_hash`].
///
/// Bring the trait into scope to call `GitHubEvent::from_payload(..)`.
pub trait FromPayload {
    fn from_payload(event_type: impl Into<String>, payload: Value) -> Self;
}

impl FromPayload for GitHubEvent {
    fn from_payload(event_type: impl Into<String>, payload: Value) -> Self {
        event_from_payload(&Sha256PayloadHasher, event_type, payload)
    }
}
