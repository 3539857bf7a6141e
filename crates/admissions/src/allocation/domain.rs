use serde::{Deserialize, Serialize};

/// Single exam result carried on an applicant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    pub subject: String,
    pub score: f64,
}

/// Applicant as loaded from the intake file; read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub full_name: String,
    pub entrance_score: f64,
    pub exam_scores: Vec<ExamScore>,
    /// Department names ordered by priority, index 0 first.
    pub preferences: Vec<String>,
}

impl Applicant {
    pub fn new(
        full_name: impl Into<String>,
        entrance_score: f64,
        exam_scores: Vec<ExamScore>,
        preferences: Vec<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            entrance_score,
            exam_scores,
            preferences,
        }
    }

    /// Department named at priority rank `wave`, if the applicant supplied one.
    pub fn preference(&self, wave: usize) -> Option<&str> {
        self.preferences.get(wave).map(String::as_str)
    }

    pub fn exam_score(&self, subject: &str) -> Option<f64> {
        self.exam_scores
            .iter()
            .find(|exam| exam.subject == subject)
            .map(|exam| exam.score)
    }
}

/// Department definition: its name and the subjects averaged for its mean score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub relevant_subjects: Vec<String>,
}

impl Department {
    pub fn new<S: Into<String>>(name: impl Into<String>, relevant_subjects: Vec<S>) -> Self {
        Self {
            name: name.into(),
            relevant_subjects: relevant_subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// File stem used by the roster export, e.g. `biotech` for `Biotech`.
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }
}
