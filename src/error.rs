use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Why a single roster file contributed no records.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The file could not be opened or is not valid CSV.
    #[error("cannot read roster {file}: {source}")]
    Unreadable {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// The CSV has a header but no data rows.
    #[error("roster {file} has no data rows")]
    Empty { file: String },
}

/// Selecting a match that is not in the current match list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("match index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}

/// Failures reading or writing the persisted preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the application config directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
