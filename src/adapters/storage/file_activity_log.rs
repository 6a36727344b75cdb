//! File-based Activity Log Adapter
//!
//! Keeps the capped log as a JSON array, oldest entry first.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{ActivityEntry, ActivityLog, ActivityLogError};

/// Activity log persisted to a single JSON file
#[derive(Debug)]
pub struct FileActivityLog {
    path: PathBuf,
    capacity: usize,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileActivityLog {
    pub fn new<P: AsRef<Path>>(path: P, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: capacity.max(1),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<Vec<ActivityEntry>, ActivityLogError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ActivityLogError::Io(e.to_string())),
        };
        serde_json::from_str(&json).map_err(|e| ActivityLogError::Corrupt(e.to_string()))
    }

    async fn write_entries(&self, entries: &[ActivityEntry]) -> Result<(), ActivityLogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ActivityLogError::Io(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| ActivityLogError::Io(e.to_string()))?;
        fs::write(&self.path, json)
            .await
            .map_err(|e| ActivityLogError::Io(e.to_string()))
    }
}

#[async_trait]
impl ActivityLog for FileActivityLog {
    async fn record(&self, entry: ActivityEntry) -> Result<(), ActivityLogError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.push(entry);
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
        self.write_entries(&entries).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ActivityEntry>, ActivityLogError> {
        let entries = self.read_entries().await?;
        Ok(entries.into_iter().rev().take(limit).collect())
    }
}
