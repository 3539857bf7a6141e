//! Reads applicant records and the per-run quota.
//!
//! Records are whitespace separated: first name, last name, one score per catalog subject,
//! the entrance score, then one department name per admission stage.

use std::collections::HashSet;
use std::io::{BufRead, Read};
use std::path::Path;

use tracing::warn;

use super::catalog::DepartmentCatalog;
use super::domain::{Applicant, ExamScore};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read applicants: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {field} '{value}' is not a valid number")]
    InvalidNumber {
        line: u64,
        field: String,
        value: String,
    },
    #[error("line {line}: applicant '{name}' is listed more than once")]
    DuplicateApplicant { line: u64, name: String },
    #[error("quota was not provided")]
    MissingQuota,
    #[error("quota '{0}' is not a whole number")]
    InvalidQuota(String),
}

pub fn load_applicants<P: AsRef<Path>>(
    path: P,
    catalog: &DepartmentCatalog,
    stages: usize,
) -> Result<Vec<Applicant>, IntakeError> {
    let file = std::fs::File::open(path)?;
    parse_applicants(file, catalog, stages)
}

pub fn parse_applicants<R: Read>(
    reader: R,
    catalog: &DepartmentCatalog,
    stages: usize,
) -> Result<Vec<Applicant>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let subjects = catalog.subjects();
    let expected = 2 + subjects.len() + 1 + stages;
    let mut applicants = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 1);
        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != expected {
            return Err(IntakeError::FieldCount {
                line,
                expected,
                found: fields.len(),
            });
        }

        let full_name = format!("{} {}", fields[0], fields[1]);
        if !seen.insert(full_name.clone()) {
            return Err(IntakeError::DuplicateApplicant {
                line,
                name: full_name,
            });
        }

        let exam_scores = subjects
            .iter()
            .zip(&fields[2..2 + subjects.len()])
            .map(|(subject, raw)| {
                parse_score(line, subject, raw).map(|score| ExamScore {
                    subject: subject.clone(),
                    score,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let entrance_score = parse_score(line, "entrance score", fields[2 + subjects.len()])?;

        let preferences: Vec<String> = fields[3 + subjects.len()..]
            .iter()
            .map(|name| name.to_string())
            .collect();
        for preference in preferences.iter().filter(|name| !catalog.contains(name)) {
            warn!(line, applicant = %full_name, department = %preference, "preference names an unknown department");
        }

        applicants.push(Applicant::new(
            full_name,
            entrance_score,
            exam_scores,
            preferences,
        ));
    }

    Ok(applicants)
}

fn parse_score(line: u64, field: &str, raw: &str) -> Result<f64, IntakeError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| IntakeError::InvalidNumber {
            line,
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses the per-department quota. Zero and negative values are accepted.
pub fn parse_quota(raw: &str) -> Result<i64, IntakeError> {
    let token = raw.split_whitespace().next().ok_or(IntakeError::MissingQuota)?;
    token
        .parse::<i64>()
        .map_err(|_| IntakeError::InvalidQuota(token.to_string()))
}

/// Reads the quota from the first non-blank line of `reader`.
pub fn read_quota<R: BufRead>(reader: R) -> Result<i64, IntakeError> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            return parse_quota(&line);
        }
    }
    Err(IntakeError::MissingQuota)
}
