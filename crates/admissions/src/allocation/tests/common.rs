use crate::allocation::catalog::DepartmentCatalog;
use crate::allocation::domain::{Applicant, ExamScore};

/// Builds an applicant with scores in standard catalog order: Physics, Chemistry, Math,
/// ComputerScience.
pub(super) fn applicant(
    name: &str,
    scores: [f64; 4],
    entrance: f64,
    preferences: [&str; 3],
) -> Applicant {
    let exam_scores = DepartmentCatalog::standard()
        .subjects()
        .iter()
        .zip(scores)
        .map(|(subject, score)| ExamScore {
            subject: subject.clone(),
            score,
        })
        .collect();

    Applicant::new(
        name,
        entrance,
        exam_scores,
        preferences.iter().map(|name| name.to_string()).collect(),
    )
}

/// Applicant whose effective score equals `entrance` for every department.
pub(super) fn entrance_only(name: &str, entrance: f64, preferences: [&str; 3]) -> Applicant {
    applicant(name, [0.0; 4], entrance, preferences)
}

pub(super) fn names(applicants: &[Applicant]) -> Vec<&str> {
    applicants
        .iter()
        .map(|applicant| applicant.full_name.as_str())
        .collect()
}
