//! Wave-based allocation of applicants to departments.
//!
//! Each wave groups the remaining applicants by the department they named at that priority
//! rank, ranks every group by effective score, and admits up to the seats each department
//! still has. Admitted applicants leave the pool before the next wave starts.

pub mod catalog;
pub mod domain;
pub mod driver;
pub mod error;
pub mod intake;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod router;
pub mod scoring;
pub mod wave;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, DepartmentCatalog};
pub use domain::{Applicant, Department, ExamScore};
pub use driver::{
    allocate, AllocationDriver, AllocationOutcome, AllocationStage, DEFAULT_ADMISSION_STAGES,
    MAX_ADMISSION_STAGES,
};
pub use error::AllocationError;
pub use intake::{load_applicants, parse_applicants, parse_quota, read_quota, IntakeError};
pub use ranking::{rank, RankedApplicant};
pub use report::{
    roster_file_contents, write_roster_files, AllocationSummary, DepartmentRosterView,
    ExportError, RosterEntryView,
};
pub use roster::{AdmissionRoster, RemainingPool};
pub use router::{allocation_router, AllocationRequest, AllocationSettings};
pub use scoring::{effective_score, subject_mean_score, DepartmentScores};
pub use wave::{DepartmentIntake, WaveAllocator, WaveReport};
