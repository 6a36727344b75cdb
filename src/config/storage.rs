//! Local storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Paths and limits of the local session and activity files
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,

    #[serde(default = "default_activity_log_path")]
    pub activity_log_path: PathBuf,

    /// Entries kept before the oldest are dropped
    #[serde(default = "default_activity_log_capacity")]
    pub activity_log_capacity: usize,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.session_path"));
        }
        if self.activity_log_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.activity_log_path"));
        }
        if self.activity_log_capacity == 0 {
            return Err(ValidationError::InvalidActivityCapacity);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
            activity_log_path: default_activity_log_path(),
            activity_log_capacity: default_activity_log_capacity(),
        }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from(".uaem/session.json")
}

fn default_activity_log_path() -> PathBuf {
    PathBuf::from(".uaem/activity.json")
}

fn default_activity_log_capacity() -> usize {
    crate::ports::DEFAULT_ACTIVITY_CAPACITY
}
