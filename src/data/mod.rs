/// Data layer: core types, roster loading, and name search.
///
/// Architecture:
/// ```text
///  SOC-1101-W01.csv  MATH-2200-A1.csv  ...  (≤ 9)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rosters → Vec<StudentRecord> + succeeded/failed
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ StudentRecord │  one normalized row, tagged with its source file
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  query → ordered match list → resolve(index)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod search;
