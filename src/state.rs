use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::data::loader::{LoadReport, MAX_ROSTER_FILES, load_rosters};
use crate::data::model::{RosterFile, StudentRecord};
use crate::data::search::{resolve, search};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// The presentation layer owns one of these and drives it through
/// [`load_rosters`](Self::load_rosters), [`flush`](Self::flush),
/// [`on_query_changed`](Self::on_query_changed) and
/// [`select_match`](Self::select_match).
#[derive(Debug, Default)]
pub struct AppState {
    /// Roster paths from the most recent load (at most nine).
    loaded_files: Vec<RosterFile>,

    /// Every record from the most recent load. Rebuilt, never merged.
    records: Vec<StudentRecord>,

    /// Current search text.
    query: String,

    /// Records matching `query`, ordered by name.
    matches: Vec<StudentRecord>,

    /// Record chosen from `matches`, if any.
    selected: Option<StudentRecord>,

    /// Base names of files that loaded / failed in the most recent load.
    succeeded: Vec<String>,
    failed: Vec<String>,

    /// Warnings to surface to the user (truncation, failed files, config).
    warnings: Vec<String>,

    /// Status message shown in the UI.
    status_message: Option<String>,

    /// Where preferences persist. `None` disables persistence.
    store: Option<ConfigStore>,
}

impl AppState {
    pub fn new(store: Option<ConfigStore>) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Build the startup state: reload whichever rosters were saved last
    /// session and still exist. The config file is not rewritten.
    pub fn restore(store: Option<ConfigStore>) -> Self {
        let saved = store
            .as_ref()
            .map(|s| s.load().roster_files)
            .unwrap_or_default();

        let mut state = Self::new(store);
        if !saved.is_empty() {
            log::info!("Restoring {} roster file(s) from last session", saved.len());
            state.ingest(&saved);
        }
        state
    }

    // -- boundary operations --

    /// Load a user-selected batch of rosters, replacing everything held.
    ///
    /// On success the existing paths are persisted. Failures and truncation
    /// become warnings; nothing here is fatal.
    pub fn load_rosters<P: AsRef<Path>>(&mut self, paths: &[P]) {
        if paths.is_empty() {
            return;
        }
        let report = self.ingest(paths);
        if !report.any_succeeded() {
            return;
        }

        let loaded: Vec<&Path> = self.loaded_files.iter().map(|f| f.path.as_path()).collect();
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&loaded) {
                log::error!("Preferences not saved: {e}");
                self.warnings.push(format!("Roster list not saved: {e}"));
            }
        }
    }

    /// Drop all rosters and records, and remove the persisted preferences.
    pub fn flush(&mut self) {
        let store = self.store.take();
        *self = Self::new(store);

        if let Some(store) = &self.store {
            if let Err(e) = store.delete() {
                log::error!("{e}");
            }
        }
        self.status_message = Some("All data flushed.".to_string());
    }

    /// Re-run the search for new query text. Clears the selection.
    pub fn on_query_changed(&mut self, text: &str) {
        self.query = text.to_string();
        self.matches = search(&self.query, &self.records);
        self.selected = None;
    }

    /// Select the match at `index`. Out of range means nothing is selected.
    pub fn select_match(&mut self, index: usize) -> Option<&StudentRecord> {
        self.selected = match resolve(&self.matches, index) {
            Ok(record) => Some(record.clone()),
            Err(e) => {
                log::debug!("Ignoring selection: {e}");
                None
            }
        };
        self.selected.as_ref()
    }

    // -- read access --

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[StudentRecord] {
        &self.matches
    }

    pub fn selected(&self) -> Option<&StudentRecord> {
        self.selected.as_ref()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn loaded_files(&self) -> &[RosterFile] {
        &self.loaded_files
    }

    pub fn loaded_paths(&self) -> Vec<PathBuf> {
        self.loaded_files.iter().map(|f| f.path.clone()).collect()
    }

    /// Rosters that loaded in the most recent load.
    pub fn file_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn succeeded(&self) -> &[String] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // -- internals --

    /// Replace loaded files and records with a fresh load, then reset the
    /// search with an empty query.
    fn ingest<P: AsRef<Path>>(&mut self, paths: &[P]) -> LoadReport {
        let kept = paths.len().min(MAX_ROSTER_FILES);
        let mut report = load_rosters(paths);

        self.loaded_files = paths[..kept]
            .iter()
            .map(|p| RosterFile::from_path(p.as_ref()))
            .collect();
        self.records = std::mem::take(&mut report.records);
        self.succeeded = report.succeeded.clone();
        self.failed = report.failed.clone();

        self.warnings.clear();
        if let Some(total) = report.truncated_from {
            self.warnings.push(format!(
                "{total} files selected; only the first {MAX_ROSTER_FILES} were loaded."
            ));
        }
        if !self.failed.is_empty() {
            self.warnings
                .push(format!("Could not load: {}", self.failed.join(", ")));
        }

        self.on_query_changed("");
        self.status_message = Some(format!(
            "Rosters loaded ({} students from {} file(s)). Search for a student above.",
            self.records.len(),
            self.succeeded.len()
        ));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn roster(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn query_then_select() {
        let dir = TempDir::new().unwrap();
        let a = roster(
            &dir,
            "SOC-1101-W01.csv",
            "Student Name,Preferred Email\nAna Smith,ana@x.edu\nDIANA Cruz,d@x.edu\nBob,b@x.edu\n",
        );
        let mut state = AppState::new(None);
        state.load_rosters(&[a]);
        assert_eq!(state.record_count(), 3);
        assert!(state.matches().is_empty());

        state.on_query_changed("ana");
        assert_eq!(state.matches().len(), 2);

        let picked = state.select_match(1).map(|r| r.student_name.clone());
        assert_eq!(picked.as_deref(), Some("DIANA Cruz"));
        assert_eq!(state.selected().unwrap().email, "d@x.edu");

        assert!(state.select_match(5).is_none());
        assert!(state.selected().is_none());
    }

    #[test]
    fn reload_resets_matches_and_selection() {
        let dir = TempDir::new().unwrap();
        let a = roster(&dir, "SOC-1101-W01.csv", "Name\nAna\n");
        let b = roster(&dir, "SOC-1101-W02.csv", "Name\nZed\n");
        let mut state = AppState::new(None);

        state.load_rosters(&[&a]);
        state.on_query_changed("an");
        state.select_match(0);
        assert!(state.selected().is_some());

        state.load_rosters(&[&b]);
        assert_eq!(state.query(), "");
        assert!(state.matches().is_empty());
        assert!(state.selected().is_none());
        assert_eq!(state.records()[0].student_name, "Zed");
    }

    #[test]
    fn failed_files_become_warnings() {
        let dir = TempDir::new().unwrap();
        let good = roster(&dir, "SOC-1101-W01.csv", "Name\nAna\n");
        let empty = roster(&dir, "SOC-1101-W02.csv", "Name\n");
        let mut state = AppState::new(None);

        state.load_rosters(&[good, empty]);
        assert_eq!(state.succeeded(), ["SOC-1101-W01.csv"]);
        assert_eq!(state.failed(), ["SOC-1101-W02.csv"]);
        assert!(state.warnings().iter().any(|w| w.contains("SOC-1101-W02.csv")));
        assert_eq!(state.file_count(), 1);
    }

    #[test]
    fn all_failed_batch_counts_no_rosters() {
        let dir = TempDir::new().unwrap();
        let empty = roster(&dir, "SOC-1101-W01.csv", "Name\n");
        let missing = dir.path().join("SOC-1101-W02.csv");
        let mut state = AppState::new(None);

        state.load_rosters(&[empty, missing]);
        assert_eq!(state.file_count(), 0);
        assert_eq!(state.loaded_files().len(), 2);
        assert_eq!(state.failed().len(), 2);
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut state = AppState::new(None);
        state.load_rosters::<PathBuf>(&[]);
        assert_eq!(state.file_count(), 0);
        assert!(state.status_message().is_none());
    }
}
