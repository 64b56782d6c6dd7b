//! Triggers and actions recorded against an execution.

use serde::{Deserialize, Serialize};

/// What started an execution. Collection `Trigger`, keyed by `execution_id`
/// (one trigger per execution).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// References `Bot_Execution.execution_id`.
    pub execution_id: String,
    /// e.g. "webhook", "schedule", "manual".
    pub trigger_type: String,
    /// References `GitHub_Event.payload_hash` when a webhook started the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Something a bot did during an execution. Collection `Action`, keyed by
/// `execution_id`, `action_type`, then `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// References `Bot_Execution.execution_id`.
    pub execution_id: String,
    /// References `Action_Type.name`.
    pub action_type: String,
    pub timestamp: i64,
    /// Primary key of the `GitHub_Object` acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_object: Option<String>,
    /// Primary key of the `GitHub_Repository` acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub succeeded: Option<bool>,
    /// Free-form action payload (labels applied, comment body, merge sha...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// A kind of action bots can take. Collection `Action_Type`, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_deserialize_minimal() {
        let action: Action = serde_json::from_value(json!({
            "execution_id": "abc123",
            "action_type": "merge",
            "timestamp": 1000,
        }))
        .unwrap();
        assert_eq!(action.action_type, "merge");
        assert!(action.destination_object.is_none());
        assert!(action.details.is_none());
    }

    #[test]
    fn test_action_details_roundtrip() {
        let action = Action {
            execution_id: "abc123".to_string(),
            action_type: "label".to_string(),
            timestamp: 1000,
            destination_object: Some("PullRequest_repo1_42".to_string()),
            destination_repo: Some("repo1_octo".to_string()),
            succeeded: Some(true),
            details: Some(json!({"labels": ["automerge"]})),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["details"]["labels"][0], "automerge");
        let parsed: Action = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn test_trigger_optional_fields_omitted() {
        let trigger = Trigger {
            execution_id: "abc123".to_string(),
            trigger_type: "schedule".to_string(),
            github_event: None,
            timestamp: None,
        };
        let json = serde_json::to_string(&trigger).unwrap();
        assert!(!json.contains("github_event"));
        assert!(!json.contains("timestamp"));
    }
}
