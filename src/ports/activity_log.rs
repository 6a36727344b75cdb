//! ActivityLog port - append-only, capped log of user activity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default number of entries kept before the oldest are dropped.
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 100;

/// Kind of recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SurveyCompleted,
    Login,
    Logout,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::SurveyCompleted => "survey_completed",
            ActivityKind::Login => "login",
            ActivityKind::Logout => "logout",
        }
    }
}

/// One log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub user_name: String,
    pub description: String,
    /// Serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ActivityEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(
        kind: ActivityKind,
        user_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            user_name: user_name.into(),
            description: description.into(),
            timestamp: Utc::now(),
            metadata: BTreeMap::new(),
        }
    }

    /// Adds a metadata field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata.insert(key.into(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityLogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("activity log is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Appends an entry, dropping the oldest once the capacity is reached.
    async fn record(&self, entry: ActivityEntry) -> Result<(), ActivityLogError>;

    /// Returns up to `limit` entries, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<ActivityEntry>, ActivityLogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_rfc3339_timestamp_and_snake_case_kind() {
        let entry = ActivityEntry::new(ActivityKind::SurveyCompleted, "Laura Méndez", "Evaluated")
            .with_metadata("professor_id", 3);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["kind"], "survey_completed");
        assert_eq!(json["metadata"]["professor_id"], "3");
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn entry_without_metadata_deserializes() {
        let json = r#"{
            "kind": "login",
            "user_name": "Laura",
            "description": "Logged in",
            "timestamp": "2025-01-10T12:00:00Z"
        }"#;
        let entry: ActivityEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, ActivityKind::Login);
        assert!(entry.metadata.is_empty());
    }
}
