use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// StudentRecord – one row of one roster file
// ---------------------------------------------------------------------------

/// A single normalized student entry.
///
/// `student_name` is never empty for a record held in memory; the loader drops
/// rows whose resolved name is blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentRecord {
    pub course: String,
    pub course_number: String,
    pub section: String,
    pub student_name: String,
    pub student_id: String,
    pub class_level: String,
    pub email: String,
    /// Base name of the roster file the row came from.
    pub source_file: String,
}

impl StudentRecord {
    /// Multi-line text for the detail pane. Empty optional fields are omitted.
    pub fn details(&self) -> String {
        let mut lines = vec![format!("Name: {}", self.student_name)];

        let class = [self.course.as_str(), self.course_number.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if !class.is_empty() {
            lines.push(format!("Class: {class}"));
        }

        for (label, value) in [
            ("Section", &self.section),
            ("Student ID", &self.student_id),
            ("Class Level", &self.class_level),
            ("Email", &self.email),
        ] {
            if !value.is_empty() {
                lines.push(format!("{label}: {value}"));
            }
        }

        lines.push(format!("Roster: {}", self.source_file));
        lines.join("\n")
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.student_name)
    }
}

// ---------------------------------------------------------------------------
// RosterFile – a roster path plus metadata derived from its name
// ---------------------------------------------------------------------------

/// `<letters>-<alnum>-<alnum>.csv`, e.g. `SOC-1101-W01.csv`.
static ROSTER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)-([A-Za-z0-9]+)-([A-Za-z0-9]+)\.csv$")
        .expect("roster name pattern is valid")
});

/// Course/number/section as encoded in a roster's file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseInfo {
    pub course: String,
    pub course_number: String,
    pub section: String,
}

impl CourseInfo {
    /// Derive course metadata from a file's base name.
    ///
    /// Names following the convention are split by the pattern. Anything else
    /// falls back to splitting the stem on `-`: three or more parts give
    /// course/number/section, fewer leave the whole stem as the course.
    pub fn from_file_name(file_name: &str) -> Self {
        if let Some(caps) = ROSTER_NAME.captures(file_name) {
            return Self {
                course: caps[1].to_string(),
                course_number: caps[2].to_string(),
                section: caps[3].to_string(),
            };
        }

        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);

        let parts: Vec<&str> = stem.split('-').collect();
        if parts.len() >= 3 {
            Self {
                course: parts[0].to_string(),
                course_number: parts[1].to_string(),
                section: parts[2].to_string(),
            }
        } else {
            Self {
                course: stem.to_string(),
                ..Self::default()
            }
        }
    }
}

/// A roster path the session knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFile {
    pub path: PathBuf,
    /// Base name, e.g. `SOC-1101-W01.csv`.
    pub file_name: String,
    pub info: CourseInfo,
}

impl RosterFile {
    pub fn from_path(path: &Path) -> Self {
        let file_name = base_name(path);
        let info = CourseInfo::from_file_name(&file_name);
        Self {
            path: path.to_path_buf(),
            file_name,
            info,
        }
    }
}

/// Base name of a path, lossily converted; the full path if it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
