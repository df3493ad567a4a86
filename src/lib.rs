//! Class roster lookup: load CSV rosters, search students by name, and
//! remember which rosters were open between sessions.

pub mod config;
pub mod data;
pub mod error;
pub mod state;

pub use config::{ConfigStore, Preferences};
pub use data::loader::{LoadReport, MAX_ROSTER_FILES, load_rosters, read_roster};
pub use data::model::{CourseInfo, RosterFile, StudentRecord};
pub use data::search::{resolve, search};
pub use error::{ConfigError, RosterError, SearchError};
pub use state::AppState;
