//! Storage Adapters
//!
//! Implementations of the SessionStore and ActivityLog ports.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - Stores the token/user blob as a JSON file
//! - **InMemorySessionStore** - Stores the session in memory (testing)
//! - **FileActivityLog** - Capped activity log in a JSON file
//! - **InMemoryActivityLog** - Capped activity log in memory (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileActivityLog, FileSessionStore};
//!
//! let sessions = FileSessionStore::new(".uaem/session.json");
//! let activity = FileActivityLog::new(".uaem/activity.json", 100);
//! ```

mod file_activity_log;
mod file_session_store;
mod in_memory_activity_log;
mod in_memory_session_store;

pub use file_activity_log::FileActivityLog;
pub use file_session_store::FileSessionStore;
pub use in_memory_activity_log::InMemoryActivityLog;
pub use in_memory_session_store::InMemorySessionStore;
