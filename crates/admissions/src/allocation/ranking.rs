use std::cmp::Ordering;

use super::domain::{Applicant, Department};
use super::error::AllocationError;
use super::scoring::{self, DepartmentScores};

/// Applicant paired with the scores computed for the department being ranked.
#[derive(Debug, Clone, Copy)]
pub struct RankedApplicant<'a> {
    pub applicant: &'a Applicant,
    pub scores: DepartmentScores,
}

impl RankedApplicant<'_> {
    pub fn full_name(&self) -> &str {
        &self.applicant.full_name
    }
}

/// Orders applicants for a department: effective score descending, then full name ascending.
///
/// Scores are computed once per applicant before sorting, so a missing subject fails the
/// whole ranking instead of surfacing mid-comparison.
pub fn rank<'a, I>(
    applicants: I,
    department: &Department,
) -> Result<Vec<RankedApplicant<'a>>, AllocationError>
where
    I: IntoIterator<Item = &'a Applicant>,
{
    let mut ranked = applicants
        .into_iter()
        .map(|applicant| {
            scoring::score(applicant, department)
                .map(|scores| RankedApplicant { applicant, scores })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(compare);
    Ok(ranked)
}

pub fn compare(left: &RankedApplicant<'_>, right: &RankedApplicant<'_>) -> Ordering {
    right
        .scores
        .effective_score
        .total_cmp(&left.scores.effective_score)
        .then_with(|| left.full_name().cmp(right.full_name()))
}
