use super::model::StudentRecord;
use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Name search: query → ordered match list
// ---------------------------------------------------------------------------

/// Return the records whose name contains `query`, ignoring case.
///
/// * An empty query matches nothing.
/// * The query is a literal substring; no character is special.
/// * Matches are ordered by name using plain ordinal comparison. Equal names
///   keep their order from `records`.
pub fn search(query: &str, records: &[StudentRecord]) -> Vec<StudentRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = fold_case(query);
    let mut matches: Vec<StudentRecord> = records
        .iter()
        .filter(|r| fold_case(&r.student_name).contains(&needle))
        .cloned()
        .collect();

    // `sort_by` is stable.
    matches.sort_by(|a, b| a.student_name.cmp(&b.student_name));

    log::debug!("query {query:?}: {} of {} records match", matches.len(), records.len());
    matches
}

/// Lowercase each character on its own. `str::to_lowercase` treats a
/// word-final `Σ` differently from one mid-word, which would let an exact
/// substring fail to match.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Look up the record at `index` in a match list.
pub fn resolve(matches: &[StudentRecord], index: usize) -> Result<&StudentRecord, SearchError> {
    matches.get(index).ok_or(SearchError::OutOfRange {
        index,
        len: matches.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, id: &str) -> StudentRecord {
        StudentRecord {
            student_name: name.to_string(),
            student_id: id.to_string(),
            ..StudentRecord::default()
        }
    }

    fn names(records: &[StudentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.student_name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_nothing() {
        let records = vec![student("Ana Smith", "1"), student("Bob", "2")];
        assert!(search("", &records).is_empty());
    }

    #[test]
    fn match_is_case_insensitive_and_sorted_by_name() {
        let records = vec![
            student("Ana Smith", "1"),
            student("DIANA Cruz", "2"),
            student("Bob", "3"),
        ];
        let matches = search("ana", &records);
        // Ordinal order puts upper-case 'A' before 'D'.
        assert_eq!(names(&matches), vec!["Ana Smith", "DIANA Cruz"]);

        let matches = search("ANA", &records);
        assert_eq!(names(&matches), vec!["Ana Smith", "DIANA Cruz"]);
    }

    #[test]
    fn ordering_is_ordinal_not_alphabetical() {
        let records = vec![student("bella", "1"), student("Zoe Bell", "2")];
        assert_eq!(names(&search("bel", &records)), vec!["Zoe Bell", "bella"]);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let records = vec![
            student("O'Neil (Jr.)", "1"),
            student("Oxneil Jrx", "2"),
            student("A.*B", "3"),
        ];
        assert_eq!(names(&search("(jr.)", &records)), vec!["O'Neil (Jr.)"]);
        assert_eq!(names(&search(".*", &records)), vec!["A.*B"]);
    }

    #[test]
    fn greek_sigma_matches_regardless_of_position() {
        let records = vec![student("ΟΔΥΣΣΕΑΣ Παππάς", "1"), student("Ελένη", "2")];
        assert_eq!(names(&search("ΥΣ", &records)), vec!["ΟΔΥΣΣΕΑΣ Παππάς"]);
        assert_eq!(names(&search("υσσ", &records)), vec!["ΟΔΥΣΣΕΑΣ Παππάς"]);
        assert_eq!(names(&search("εασ", &records)), vec!["ΟΔΥΣΣΕΑΣ Παππάς"]);
    }

    #[test]
    fn equal_names_keep_input_order() {
        let records = vec![
            student("Sam Lee", "first"),
            student("Alex Lee", "x"),
            student("Sam Lee", "second"),
        ];
        let matches = search("lee", &records);
        let ids: Vec<_> = matches.iter().map(|r| r.student_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "first", "second"]);
    }

    #[test]
    fn search_is_idempotent() {
        let records = vec![student("Ana", "1"), student("Anabel", "2"), student("Dana", "3")];
        let snapshot = records.clone();
        let first = search("an", &records);
        let second = search("an", &records);
        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn resolve_in_and_out_of_range() {
        let matches = vec![student("Ana", "1"), student("Bob", "2")];
        assert_eq!(resolve(&matches, 1).unwrap().student_name, "Bob");
        assert_eq!(
            resolve(&matches, 2),
            Err(SearchError::OutOfRange { index: 2, len: 2 })
        );
        assert!(resolve(&[], 0).is_err());
    }
}
