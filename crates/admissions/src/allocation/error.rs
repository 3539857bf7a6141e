/// Faults raised while scoring, ranking, or allocating applicants.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("applicant '{applicant}' has no score for subject '{subject}'")]
    MissingSubjectScore { applicant: String, subject: String },
    #[error("department '{0}' has no relevant subjects to average")]
    NoRelevantSubjects(String),
    #[error("applicant '{0}' appears more than once; full names must be unique")]
    DuplicateApplicant(String),
    #[error("number of admission stages must be at least 1")]
    NoStages,
    #[error("{requested} admission stages requested; at most {max} are supported")]
    TooManyStages { requested: usize, max: usize },
    #[error("allocation already completed all {0} stage(s)")]
    AlreadyCompleted(usize),
}
