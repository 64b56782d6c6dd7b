//! Bot, execution, queue, and error records.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Generate a new execution id (UUID v7, time-sortable).
pub fn new_execution_id() -> String {
    Uuid::now_v7().to_string()
}

/// Current time as epoch milliseconds, the unit all record timestamps use.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn default_true() -> bool {
    true
}

/// A registered automation bot. Collection `Bot`, keyed by `bot_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub bot_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Disabled bots are kept for history but no longer scheduled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Bot {
    pub fn new(bot_name: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            description: None,
            enabled: true,
            created_at: None,
        }
    }
}

/// One run of a bot. Collection `Bot_Execution`, keyed by `execution_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotExecution {
    pub execution_id: String,
    /// References `Bot.bot_name`.
    pub bot_name: String,
    pub status: ExecutionStatus,
    pub start_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
}

impl BotExecution {
    /// Start a new execution for `bot_name` with a fresh id and the current time.
    pub fn start(bot_name: impl Into<String>) -> Self {
        Self {
            execution_id: new_execution_id(),
            bot_name: bot_name.into(),
            status: ExecutionStatus::Running,
            start_time: now_millis(),
            end_time: None,
            trigger_type: None,
        }
    }

    /// Wall-clock duration in milliseconds, once the execution has ended.
    /// `None` if the timestamps are too far apart to subtract.
    pub fn duration_ms(&self) -> Option<i64> {
        self.end_time
            .and_then(|end| end.checked_sub(self.start_time))
    }
}

/// Execution lifecycle states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    #[default]
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl ExecutionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Succeeded | ExecutionStatus::Failed | ExecutionStatus::Cancelled
        )
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStatus::Queued => write!(f, "queued"),
            ExecutionStatus::Running => write!(f, "running"),
            ExecutionStatus::Succeeded => write!(f, "succeeded"),
            ExecutionStatus::Failed => write!(f, "failed"),
            ExecutionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for ExecutionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queued" => Ok(ExecutionStatus::Queued),
            "running" => Ok(ExecutionStatus::Running),
            "succeeded" => Ok(ExecutionStatus::Succeeded),
            "failed" => Ok(ExecutionStatus::Failed),
            "cancelled" => Ok(ExecutionStatus::Cancelled),
            other => Err(format!("invalid execution status: '{other}'")),
        }
    }
}

/// Snapshot of a task queue. Collection `Task_Queue_Status`, keyed by
/// `queue_name` then `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskQueueStatus {
    pub queue_name: String,
    pub timestamp: i64,
    #[serde(default)]
    pub pending_tasks: u64,
    #[serde(default)]
    pub running_tasks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oldest_task_age_ms: Option<u64>,
}

/// An error raised during an execution. Collection `Error`, keyed by
/// `execution_id` then `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionError {
    /// References `Bot_Execution.execution_id`.
    pub execution_id: String,
    pub timestamp: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_defaults_when_deserialized() {
        let bot: Bot = serde_json::from_str(r#"{"bot_name":"merge-bot"}"#).unwrap();
        assert_eq!(bot, Bot::new("merge-bot"));
        assert!(bot.enabled);
    }

    #[test]
    fn test_bot_optional_fields_omitted() {
        let json = serde_json::to_string(&Bot::new("merge-bot")).unwrap();
        assert_eq!(json, r#"{"bot_name":"merge-bot","enabled":true}"#);
    }

    #[test]
    fn test_execution_start() {
        let exec = BotExecution::start("merge-bot");
        assert_eq!(exec.bot_name, "merge-bot");
        assert_eq!(exec.status, ExecutionStatus::Running);
        assert!(exec.duration_ms().is_none());
        assert!(exec.execution_id.parse::<Uuid>().is_ok());
    }

    #[test]
    fn test_execution_duration() {
        let mut exec = BotExecution::start("merge-bot");
        exec.start_time = 1_000;
        exec.end_time = Some(3_500);
        assert_eq!(exec.duration_ms(), Some(2_500));
    }

    #[test]
    fn test_execution_duration_out_of_range() {
        let mut exec = BotExecution::start("merge-bot");
        exec.start_time = i64::MIN;
        exec.end_time = Some(i64::MAX);
        assert_eq!(exec.duration_ms(), None);
    }

    #[test]
    fn test_execution_requires_status() {
        let result = serde_json::from_str::<BotExecution>(
            r#"{"execution_id":"abc123","bot_name":"merge-bot","start_time":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_execution_status_roundtrip() {
        for status in [
            ExecutionStatus::Queued,
            ExecutionStatus::Running,
            ExecutionStatus::Succeeded,
            ExecutionStatus::Failed,
            ExecutionStatus::Cancelled,
        ] {
            let parsed: ExecutionStatus = status.to_string().parse().unwrap();
            assert_eq!(status, parsed);
        }
        assert!("done".parse::<ExecutionStatus>().is_err());
    }

    #[test]
    fn test_execution_status_default_is_queued() {
        assert_eq!(ExecutionStatus::default(), ExecutionStatus::Queued);
        assert!(!ExecutionStatus::default().is_terminal());
    }

    #[test]
    fn test_execution_status_terminal() {
        assert!(!ExecutionStatus::Running.is_terminal());
        assert!(ExecutionStatus::Failed.is_terminal());
    }

    #[test]
    fn test_queue_status_counts_default_to_zero() {
        let status: TaskQueueStatus =
            serde_json::from_str(r#"{"queue_name":"default","timestamp":500}"#).unwrap();
        assert_eq!(status.pending_tasks, 0);
        assert_eq!(status.running_tasks, 0);
        assert!(status.oldest_task_age_ms.is_none());
    }
}
