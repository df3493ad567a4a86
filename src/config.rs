//! Persisted preferences: the roster files loaded last session.
//!
//! Stored as JSON in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/edu.roster-lookup.Roster-Lookup/
//! - Windows: %APPDATA%/roster-lookup/Roster Lookup/config/
//! - Linux: ~/.config/rosterlookup/

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_QUALIFIER: &str = "edu";
const APP_ORG: &str = "roster-lookup";
const APP_NAME: &str = "Roster Lookup";
const CONFIG_FILENAME: &str = "config.json";

/// On-disk shape of the preferences file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub roster_files: Vec<PathBuf>,
}

/// A preferences file at a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the per-OS application config directory.
    pub fn default_location() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILENAME)))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences, strictly.
    fn read(&self) -> Result<Preferences, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load preferences, dropping paths that no longer exist.
    ///
    /// An absent, unreadable or malformed file yields empty preferences. The
    /// filtered list is not written back.
    pub fn load(&self) -> Preferences {
        let prefs = match self.read() {
            Ok(prefs) => prefs,
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::info!("No preferences at {}, starting empty", self.path.display());
                return Preferences::default();
            }
            Err(e) => {
                log::warn!("{e}; starting with no rosters");
                return Preferences::default();
            }
        };

        let total = prefs.roster_files.len();
        let roster_files: Vec<PathBuf> = prefs
            .roster_files
            .into_iter()
            .filter(|p| p.exists())
            .collect();
        if roster_files.len() < total {
            log::info!(
                "Ignoring {} saved roster path(s) that no longer exist",
                total - roster_files.len()
            );
        }

        Preferences { roster_files }
    }

    /// Save the paths that currently exist on disk.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save<P: AsRef<Path>>(&self, paths: &[P]) -> Result<(), ConfigError> {
        let prefs = Preferences {
            roster_files: paths
                .iter()
                .map(|p| p.as_ref())
                .filter(|p| p.exists())
                .map(Path::to_path_buf)
                .collect(),
        };

        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, content).map_err(write_err)?;

        log::info!(
            "Saved {} roster path(s) to {}",
            prefs.roster_files.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Remove the preferences file. A file that is already gone is fine.
    pub fn delete(&self) -> Result<(), ConfigError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Removed {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ConfigError::Delete {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "Student Name\nAna\n").unwrap();
        path
    }

    #[test]
    fn default_location_ends_in_config_json() {
        // Should resolve on most platforms
        if let Ok(store) = ConfigStore::default_location() {
            assert!(store.path().ends_with(CONFIG_FILENAME));
        }
    }

    #[test]
    fn round_trip_keeps_existing_paths() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "A-1-1.csv");
        let b = touch(&dir, "B-1-1.csv");
        let store = ConfigStore::new(dir.path().join("prefs").join(CONFIG_FILENAME));

        store.save(&[&a, &b]).unwrap();
        assert_eq!(store.load().roster_files, vec![a.clone(), b.clone()]);

        fs::remove_file(&b).unwrap();
        assert_eq!(store.load().roster_files, vec![a]);
    }

    #[test]
    fn save_skips_missing_paths() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "A-1-1.csv");
        let gone = dir.path().join("GONE-1-1.csv");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));

        store.save(&[&a, &gone]).unwrap();
        let raw: Preferences =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw.roster_files, vec![a]);
    }

    #[test]
    fn file_uses_roster_files_key() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "A-1-1.csv");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));
        store.save(&[&a]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert!(value["roster_files"].is_array());
    }

    #[test]
    fn absent_or_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));
        assert_eq!(store.load(), Preferences::default());

        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "A-1-1.csv");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));
        store.save(&[&a]).unwrap();

        store.delete().unwrap();
        assert!(!store.path().exists());
        store.delete().unwrap();
    }
}
