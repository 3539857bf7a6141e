use std::fmt::Write as _;

use serde::Serialize;

use super::super::catalog::DepartmentCatalog;
use super::super::driver::AllocationOutcome;
use super::super::error::AllocationError;
use super::super::ranking;
use super::super::wave::WaveReport;

/// One admitted applicant with both score conventions for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntryView {
    pub full_name: String,
    pub mean_score: f64,
    pub effective_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRosterView {
    pub department: String,
    pub file_stem: String,
    pub entries: Vec<RosterEntryView>,
}

/// Presentation of a finished run: rosters re-ranked for display, plus what was left over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSummary {
    pub departments: Vec<DepartmentRosterView>,
    pub unplaced: Vec<String>,
    pub waves: Vec<WaveReport>,
}

impl AllocationSummary {
    pub fn from_outcome(
        outcome: &AllocationOutcome,
        catalog: &DepartmentCatalog,
    ) -> Result<Self, AllocationError> {
        let departments = catalog
            .departments()
            .iter()
            .map(|department| {
                let ranked = ranking::rank(outcome.roster.admitted(&department.name), department)?;
                Ok::<_, AllocationError>(DepartmentRosterView {
                    department: department.name.clone(),
                    file_stem: department.file_stem(),
                    entries: ranked
                        .into_iter()
                        .map(|entry| RosterEntryView {
                            full_name: entry.full_name().to_string(),
                            mean_score: entry.scores.mean_score,
                            effective_score: entry.scores.effective_score,
                        })
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            departments,
            unplaced: outcome
                .unplaced
                .iter()
                .map(|applicant| applicant.full_name.clone())
                .collect(),
            waves: outcome.waves.clone(),
        })
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentRosterView> {
        self.departments
            .iter()
            .find(|view| view.department == name)
    }

    /// Console listing: department name, then `name mean` with one decimal, then a blank line.
    pub fn render_human(&self) -> String {
        let mut output = String::new();
        for view in &self.departments {
            let _ = writeln!(output, "{}", view.department);
            for entry in &view.entries {
                let _ = writeln!(output, "{} {:.1}", entry.full_name, entry.mean_score);
            }
            output.push('\n');
        }
        output
    }
}
