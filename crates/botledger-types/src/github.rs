//! GitHub metadata records: events, repositories, and the objects bots act on.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::key::KeyValue;

/// A received webhook event. Collection `GitHub_Event`, keyed by
/// `payload_hash` so redeliveries of the same payload collapse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubEvent {
    pub payload_hash: String,
    /// The `X-GitHub-Event` header value ("pull_request", "push", ...).
    pub event_type: String,
    /// References `GitHub_Repository` by its primary key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// A repository a bot is installed on. Collection `GitHub_Repository`,
/// keyed by `repo_name` then `owner_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub repo_name: String,
    pub owner_name: String,
    /// Required; write `Unknown` when the owner type cannot be determined.
    pub owner_type: OwnerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

impl GitHubRepository {
    /// `owner/repo`, as GitHub displays it.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner_name, self.repo_name)
    }
}

/// Kind of account that owns a repository.
///
/// `Unknown` is a placeholder for when the owner type cannot be determined;
/// it is a real stored value, not a parse fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerType {
    Organization,
    User,
    #[default]
    Unknown,
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerType::Organization => write!(f, "Organization"),
            OwnerType::User => write!(f, "User"),
            OwnerType::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for OwnerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Organization" => Ok(OwnerType::Organization),
            "User" => Ok(OwnerType::User),
            "Unknown" => Ok(OwnerType::Unknown),
            other => Err(format!("invalid owner type: '{other}'")),
        }
    }
}

/// An issue, pull request, commit, or other object inside a repository.
/// Collection `GitHub_Object`, keyed by `object_type`, `repository`, then
/// `object_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubObject {
    /// e.g. "PullRequest", "Issue", "Commit".
    pub object_type: String,
    /// References `GitHub_Repository` by its primary key.
    pub repository: String,
    pub object_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Issue and pull request numbers are numeric; commits are keyed by SHA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Number(u64),
    Name(String),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Number(n) => write!(f, "{n}"),
            ObjectId::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ObjectId {
    fn from(n: u64) -> Self {
        ObjectId::Number(n)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        ObjectId::Name(s.to_string())
    }
}

impl From<&ObjectId> for KeyValue {
    fn from(id: &ObjectId) -> Self {
        match id {
            ObjectId::Number(n) => KeyValue::UInt(*n),
            ObjectId::Name(s) => KeyValue::Str(s.clone()),
        }
    }
}
