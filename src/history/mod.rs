//! Persisted calculation history.
//!
//! This module provides functionality to:
//! - Record completed calculations, newest first, capped at 100 entries
//! - Mirror the list to a JSON file under the user config directory
//! - Summarize usage and export the list as CSV

mod entry;
mod store;

pub use entry::HistoryEntry;
pub use store::{HISTORY_CAPACITY, HistoryStats, HistoryStore};
