//! A single recorded calculation.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One completed calculation with its local-time stamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch at record time.
    pub id: i64,
    /// The evaluated expression, e.g. `50 + 3`.
    pub expression: String,
    /// The formatted result, e.g. `53`.
    pub result: String,
    /// `YYYY-MM-DD HH:MM:SS` in local time.
    pub timestamp: String,
    /// `YYYY-MM-DD` in local time, kept separately for day grouping.
    pub date: String,
}

impl HistoryEntry {
    /// Stamp a new entry with the current local time.
    pub fn new(expression: &str, result: &str) -> Self {
        let now = Local::now();
        Self {
            id: now.timestamp_millis(),
            expression: expression.to_string(),
            result: result.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        }
    }

    /// The time-of-day half of [`HistoryEntry::timestamp`].
    pub fn time(&self) -> &str {
        self.timestamp
            .split_once(' ')
            .map(|(_, time)| time)
            .unwrap_or("")
    }
}
