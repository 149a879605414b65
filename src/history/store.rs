//! Capped, persisted store of completed calculations.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::engine::Operator;
use crate::error::StorageError;
use crate::paths;

use super::entry::HistoryEntry;

/// Oldest entries are dropped beyond this many.
pub const HISTORY_CAPACITY: usize = 100;

/// Aggregate counts over the stored history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStats {
    pub total: usize,
    pub today: usize,
    pub most_used_operator: Option<&'static str>,
}

/// Newest-first list of calculations, mirrored to a JSON file.
///
/// The in-memory list is authoritative. Writes go through [`HistoryStore::persist`]
/// after every mutation; a failed write leaves the memory state intact and is
/// reported to the caller.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    path: PathBuf,
}

impl HistoryStore {
    /// Load the store backing file at `path`, starting empty when the file
    /// does not exist yet.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|err| StorageError::io(&path, err))?;
            let mut entries: Vec<HistoryEntry> = serde_json::from_str(&raw)?;
            entries.truncate(HISTORY_CAPACITY);
            entries
        } else {
            Vec::new()
        };
        Ok(Self { entries, path })
    }

    /// Open the store at the default location under the user config directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(paths::history_file()?)
    }

    /// Record a calculation at the head of the list, evicting the oldest
    /// entry once the cap is reached.
    pub fn append(&mut self, expression: &str, result: &str) -> Result<(), StorageError> {
        self.entries.insert(0, HistoryEntry::new(expression, result));
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()
    }

    /// Drop all entries and remove the backing file. Returns how many entries
    /// were removed, so callers can tell an already-empty store apart.
    pub fn clear(&mut self) -> Result<usize, StorageError> {
        let removed = self.entries.len();
        self.entries.clear();
        if let Err(err) = fs::remove_file(&self.path)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            return Err(StorageError::io(&self.path, err));
        }
        Ok(removed)
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total/today counts and the most frequent operator. Ties go to the
    /// earlier operator in [`Operator::ALL`].
    pub fn stats(&self) -> HistoryStats {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let today_count = self
            .entries
            .iter()
            .filter(|entry| entry.date == today)
            .count();

        let mut most_used = None;
        let mut best = 0usize;
        for operator in Operator::ALL {
            let count = self
                .entries
                .iter()
                .filter(|entry| entry.expression.contains(operator.symbol()))
                .count();
            if count > best {
                best = count;
                most_used = Some(operator.symbol());
            }
        }

        HistoryStats {
            total: self.entries.len(),
            today: today_count,
            most_used_operator: most_used,
        }
    }

    /// Render the history as CSV, newest first. `None` when there is nothing
    /// to export.
    pub fn export_csv(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let mut csv = String::from("Hisob-kitob,Natija,Sana,Vaqt\n");
        for entry in &self.entries {
            csv.push_str(&format!(
                "\"{}\",\"{}\",\"{}\",\"{}\"\n",
                entry.expression,
                entry.result,
                entry.date,
                entry.time()
            ));
        }
        Some(csv)
    }

    /// Suggested file name for a CSV export, dated today.
    pub fn export_file_name() -> String {
        format!("kalkulyator_tarixi_{}.csv", Local::now().format("%Y-%m-%d"))
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|err| StorageError::io(&self.path, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_append_is_newest_first() {
        let (_dir, mut store) = temp_store();
        store.append("1 + 1", "2").unwrap();
        store.append("2 + 2", "4").unwrap();
        assert_eq!(store.entries()[0].expression, "2 + 2");
        assert_eq!(store.entries()[1].expression, "1 + 1");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let (_dir, mut store) = temp_store();
        for i in 0..HISTORY_CAPACITY + 1 {
            store.append(&format!("{i} + 0"), &i.to_string()).unwrap();
        }
        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.entries()[0].expression, "100 + 0");
        assert_eq!(store.entries()[HISTORY_CAPACITY - 1].expression, "1 + 0");
    }

    #[test]
    fn test_reopen_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        {
            let mut store = HistoryStore::open(path.clone()).unwrap();
            store.append("9 ÷ 3", "3").unwrap();
        }
        let store = HistoryStore::open(path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].expression, "9 ÷ 3");
        assert_eq!(store.entries()[0].result, "3");
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_reports_removed_count() {
        let (_dir, mut store) = temp_store();
        store.append("1 + 2", "3").unwrap();
        store.append("3 + 4", "7").unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.is_empty());
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_stats_counts_and_ranks_operators() {
        let (_dir, mut store) = temp_store();
        store.append("1 + 1", "2").unwrap();
        store.append("2 + 2", "4").unwrap();
        store.append("6 × 7", "42").unwrap();
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.today, 3);
        assert_eq!(stats.most_used_operator, Some("+"));
    }

    #[test]
    fn test_stats_tie_prefers_earlier_operator() {
        let (_dir, mut store) = temp_store();
        store.append("8 ÷ 2", "4").unwrap();
        store.append("3 − 1", "2").unwrap();
        let stats = store.stats();
        assert_eq!(stats.most_used_operator, Some("−"));
    }

    #[test]
    fn test_stats_on_empty_store() {
        let (_dir, store) = temp_store();
        let stats = store.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.today, 0);
        assert_eq!(stats.most_used_operator, None);
    }

    #[test]
    fn test_csv_export_layout() {
        let (_dir, mut store) = temp_store();
        store.append("50 + 3", "53").unwrap();
        let csv = store.export_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Hisob-kitob,Natija,Sana,Vaqt"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("\"50 + 3\",\"53\",\""));
        assert_eq!(row.matches('"').count(), 8);
    }

    #[test]
    fn test_csv_export_of_empty_store_is_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.export_csv(), None);
    }

    #[test]
    fn test_export_file_name_is_dated() {
        let name = HistoryStore::export_file_name();
        assert!(name.starts_with("kalkulyator_tarixi_"));
        assert!(name.ends_with(".csv"));
    }
}
