use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::model::{CourseInfo, StudentRecord, base_name};
use crate::error::RosterError;

/// Most roster files accepted by a single load.
pub const MAX_ROSTER_FILES: usize = 9;

// ---------------------------------------------------------------------------
// Column-name fallbacks
// ---------------------------------------------------------------------------

// Priority order matters: existing roster exports rely on it.
const NAME_COLUMNS: [&str; 2] = ["Student Name", "Name"];
const ID_COLUMNS: [&str; 2] = ["Student ID", "ID"];
const LEVEL_COLUMNS: [&str; 2] = ["Class Level", "Level"];
const EMAIL_COLUMNS: [&str; 2] = ["Preferred Email", "Email"];

/// Header name → column index, with the BOM and surrounding blanks stripped.
struct HeaderIndex(HashMap<String, usize>);

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        let mut map = HashMap::new();
        for (idx, raw) in headers.iter().enumerate() {
            let name = raw.trim_matches('\u{feff}').trim().to_string();
            map.entry(name).or_insert(idx);
        }
        Self(map)
    }

    /// First candidate column holding a non-empty value, trimmed.
    /// Missing columns are not an error.
    fn resolve(&self, row: &StringRecord, candidates: &[&str]) -> String {
        candidates
            .iter()
            .filter_map(|col| self.0.get(*col))
            .filter_map(|&idx| row.get(idx))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Single file
// ---------------------------------------------------------------------------

/// Read every valid student row from one roster.
///
/// The file is all-or-nothing: any error discards the rows already read.
/// Rows whose resolved name is blank are dropped silently.
pub fn read_roster(path: &Path) -> Result<Vec<StudentRecord>, RosterError> {
    let file_name = base_name(path);
    let unreadable = |source| RosterError::Unreadable {
        file: file_name.clone(),
        source,
    };

    let info = CourseInfo::from_file_name(&file_name);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(unreadable)?;

    let headers = HeaderIndex::new(reader.headers().map_err(unreadable)?);

    let mut records = Vec::new();
    let mut data_rows = 0usize;

    for result in reader.records() {
        let row = result.map_err(unreadable)?;
        data_rows += 1;

        let student_name = headers.resolve(&row, &NAME_COLUMNS);
        if student_name.is_empty() {
            continue;
        }

        records.push(StudentRecord {
            course: info.course.clone(),
            course_number: info.course_number.clone(),
            section: info.section.clone(),
            student_name,
            student_id: headers.resolve(&row, &ID_COLUMNS),
            class_level: headers.resolve(&row, &LEVEL_COLUMNS),
            email: headers.resolve(&row, &EMAIL_COLUMNS),
            source_file: file_name.clone(),
        });
    }

    if data_rows == 0 {
        return Err(RosterError::Empty { file: file_name });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Batch load
// ---------------------------------------------------------------------------

/// Outcome of loading a batch of roster files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records from every file that loaded, in input order.
    pub records: Vec<StudentRecord>,
    /// Base names of files that loaded.
    pub succeeded: Vec<String>,
    /// Base names of files that contributed nothing.
    pub failed: Vec<String>,
    /// Number of paths originally supplied, when more than
    /// [`MAX_ROSTER_FILES`] were given and the rest were ignored.
    pub truncated_from: Option<usize>,
}

impl LoadReport {
    pub fn any_succeeded(&self) -> bool {
        !self.succeeded.is_empty()
    }
}

/// Load up to [`MAX_ROSTER_FILES`] rosters.
///
/// Extra paths are dropped with a warning. Each file is processed
/// independently; one failure never stops the rest.
pub fn load_rosters<P: AsRef<Path>>(paths: &[P]) -> LoadReport {
    let mut report = LoadReport::default();

    let paths = if paths.len() > MAX_ROSTER_FILES {
        log::warn!(
            "{} roster files selected; only the first {MAX_ROSTER_FILES} will be loaded",
            paths.len()
        );
        report.truncated_from = Some(paths.len());
        &paths[..MAX_ROSTER_FILES]
    } else {
        paths
    };

    for path in paths {
        let path = path.as_ref();
        match read_roster(path) {
            Ok(records) => {
                log::info!("Loaded {} students from {}", records.len(), path.display());
                report.succeeded.push(base_name(path));
                report.records.extend(records);
            }
            Err(e) => {
                log::warn!("Skipping roster: {e}");
                report.failed.push(base_name(path));
            }
        }
    }

    report
}
