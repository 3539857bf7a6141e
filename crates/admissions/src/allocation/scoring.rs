//! Score calculations shared by ranking and roster export.

use super::domain::{Applicant, Department};
use super::error::AllocationError;
use serde::Serialize;

/// Both department-specific figures for one applicant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentScores {
    pub mean_score: f64,
    pub effective_score: f64,
}

/// Average of the applicant's scores over the department's relevant subjects.
///
/// Divides by the number of relevant subjects. A missing subject score is an error rather
/// than an implicit zero.
pub fn subject_mean_score(
    applicant: &Applicant,
    department: &Department,
) -> Result<f64, AllocationError> {
    if department.relevant_subjects.is_empty() {
        return Err(AllocationError::NoRelevantSubjects(department.name.clone()));
    }

    let mut sum = 0.0;
    for subject in &department.relevant_subjects {
        sum += applicant.exam_score(subject).ok_or_else(|| {
            AllocationError::MissingSubjectScore {
                applicant: applicant.full_name.clone(),
                subject: subject.clone(),
            }
        })?;
    }

    Ok(sum / department.relevant_subjects.len() as f64)
}

/// The higher of the subject mean and the general entrance score.
pub fn effective_score(
    applicant: &Applicant,
    department: &Department,
) -> Result<f64, AllocationError> {
    score(applicant, department).map(|scores| scores.effective_score)
}

pub fn score(
    applicant: &Applicant,
    department: &Department,
) -> Result<DepartmentScores, AllocationError> {
    let mean_score = subject_mean_score(applicant, department)?;
    Ok(DepartmentScores {
        mean_score,
        effective_score: mean_score.max(applicant.entrance_score),
    })
}
