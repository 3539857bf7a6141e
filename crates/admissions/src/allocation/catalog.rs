use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::Department;

/// Immutable lookup of known subjects and departments.
///
/// Subject order defines how score columns are read from applicant records; department
/// order defines processing and output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCatalog {
    subjects: Vec<String>,
    departments: Vec<Department>,
}

#[derive(Debug, Deserialize)]
struct CatalogDefinition {
    subjects: Vec<String>,
    departments: Vec<Department>,
}

impl DepartmentCatalog {
    pub fn new(subjects: Vec<String>, departments: Vec<Department>) -> Result<Self, CatalogError> {
        if departments.is_empty() {
            return Err(CatalogError::NoDepartments);
        }

        let known_subjects: HashSet<&str> = subjects.iter().map(String::as_str).collect();
        if known_subjects.len() != subjects.len() {
            return Err(CatalogError::DuplicateSubject);
        }

        let mut seen = HashSet::new();
        for department in &departments {
            // Roster files are keyed by the lowercase name.
            if !seen.insert(department.file_stem()) {
                return Err(CatalogError::DuplicateDepartment(department.name.clone()));
            }
            if department.relevant_subjects.is_empty() {
                return Err(CatalogError::NoRelevantSubjects(department.name.clone()));
            }
            if let Some(subject) = department
                .relevant_subjects
                .iter()
                .find(|subject| !known_subjects.contains(subject.as_str()))
            {
                return Err(CatalogError::UnknownSubject {
                    department: department.name.clone(),
                    subject: subject.clone(),
                });
            }
        }

        Ok(Self {
            subjects,
            departments,
        })
    }

    /// Five departments and four exam subjects used by the admission office.
    pub fn standard() -> Self {
        Self {
            subjects: ["Physics", "Chemistry", "Math", "ComputerScience"]
                .into_iter()
                .map(String::from)
                .collect(),
            departments: vec![
                Department::new("Biotech", vec!["Chemistry", "Physics"]),
                Department::new("Chemistry", vec!["Chemistry"]),
                Department::new("Engineering", vec!["ComputerScience", "Math"]),
                Department::new("Mathematics", vec!["Math"]),
                Department::new("Physics", vec!["Physics", "Math"]),
            ],
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_reader(reader)?;
        Self::new(definition.subjects, definition.departments)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| department.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.department(name).is_some()
    }
}

impl Default for DepartmentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must define at least one department")]
    NoDepartments,
    #[error("catalog lists a subject more than once")]
    DuplicateSubject,
    #[error("department '{0}' is defined more than once")]
    DuplicateDepartment(String),
    #[error("department '{0}' has no relevant subjects")]
    NoRelevantSubjects(String),
    #[error("department '{department}' references unknown subject '{subject}'")]
    UnknownSubject { department: String, subject: String },
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
