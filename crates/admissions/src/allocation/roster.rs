use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::domain::Applicant;
use super::error::AllocationError;

/// Admitted applicants per department, in admission order.
///
/// Only grows: the wave allocator appends and nothing removes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdmissionRoster {
    admitted: BTreeMap<String, Vec<Applicant>>,
}

impl AdmissionRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admitted(&self, department: &str) -> &[Applicant] {
        self.admitted
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn admitted_count(&self, department: &str) -> usize {
        self.admitted.get(department).map_or(0, Vec::len)
    }

    pub fn total_admitted(&self) -> usize {
        self.admitted.values().map(Vec::len).sum()
    }

    /// Department holding the applicant, if admitted anywhere.
    pub fn department_of(&self, full_name: &str) -> Option<&str> {
        self.admitted.iter().find_map(|(department, applicants)| {
            applicants
                .iter()
                .any(|applicant| applicant.full_name == full_name)
                .then_some(department.as_str())
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Applicant])> {
        self.admitted
            .iter()
            .map(|(department, applicants)| (department.as_str(), applicants.as_slice()))
    }

    pub(crate) fn admit(&mut self, department: &str, applicants: Vec<Applicant>) {
        if applicants.is_empty() {
            return;
        }
        self.admitted
            .entry(department.to_string())
            .or_default()
            .extend(applicants);
    }
}

/// Applicants not yet admitted anywhere, in intake order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemainingPool {
    applicants: Vec<Applicant>,
}

impl RemainingPool {
    /// Builds the initial pool, rejecting duplicate full names since admissions are keyed by name.
    pub fn from_applicants(applicants: Vec<Applicant>) -> Result<Self, AllocationError> {
        let mut seen = HashSet::with_capacity(applicants.len());
        for applicant in &applicants {
            if !seen.insert(applicant.full_name.as_str()) {
                return Err(AllocationError::DuplicateApplicant(
                    applicant.full_name.clone(),
                ));
            }
        }
        Ok(Self { applicants })
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Applicant> {
        self.applicants.iter()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.applicants
            .iter()
            .any(|applicant| applicant.full_name == full_name)
    }

    pub fn into_applicants(self) -> Vec<Applicant> {
        self.applicants
    }

    /// Moves every named applicant out of the pool in one pass.
    ///
    /// The result is keyed by full name; survivors keep their relative order.
    pub(crate) fn withdraw(&mut self, names: &HashSet<&str>) -> HashMap<String, Applicant> {
        let (withdrawn, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.applicants)
            .into_iter()
            .partition(|applicant| names.contains(applicant.full_name.as_str()));
        self.applicants = kept;
        withdrawn
            .into_iter()
            .map(|applicant| (applicant.full_name.clone(), applicant))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RemainingPool {
    type Item = &'a Applicant;
    type IntoIter = std::slice::Iter<'a, Applicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.applicants.iter()
    }
}
