mod files;
pub mod views;

pub use files::{roster_file_contents, write_roster_files, ExportError};
pub use views::{AllocationSummary, DepartmentRosterView, RosterEntryView};
