use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use super::catalog::DepartmentCatalog;
use super::domain::Applicant;
use super::error::AllocationError;
use super::ranking;
use super::roster::{AdmissionRoster, RemainingPool};

/// Per-department counts for a single wave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentIntake {
    pub department: String,
    pub applied: usize,
    pub admitted: usize,
    pub seats_left: usize,
}

/// Outcome of one priority wave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveReport {
    pub wave: usize,
    pub departments: Vec<DepartmentIntake>,
    /// Applicants whose preference for this wave named no known department.
    pub unmatched: usize,
    pub remaining: usize,
}

impl WaveReport {
    pub fn admitted(&self) -> usize {
        self.departments.iter().map(|intake| intake.admitted).sum()
    }
}

/// Admissions chosen for one department before the pool is touched.
struct PlannedAdmission<'a> {
    department: &'a str,
    names: Vec<String>,
}

/// Runs a single wave: partition by preference, rank, admit up to remaining capacity.
pub struct WaveAllocator<'c> {
    catalog: &'c DepartmentCatalog,
    quota: i64,
}

impl<'c> WaveAllocator<'c> {
    pub fn new(catalog: &'c DepartmentCatalog, quota: i64) -> Self {
        Self { catalog, quota }
    }

    /// Allocates wave `wave` against the current roster and pool.
    ///
    /// Admissions for every department are decided first; the pool and roster are only
    /// modified afterwards in one batch, so a ranking failure leaves both untouched.
    pub fn allocate(
        &self,
        wave: usize,
        roster: &mut AdmissionRoster,
        pool: &mut RemainingPool,
    ) -> Result<WaveReport, AllocationError> {
        let (partitions, unmatched) = self.partition(wave, pool);

        let mut plan = Vec::with_capacity(self.catalog.departments().len());
        let mut departments = Vec::with_capacity(self.catalog.departments().len());

        for department in self.catalog.departments() {
            let candidates = partitions
                .get(department.name.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let capacity = self.capacity(roster.admitted_count(&department.name));

            let names = if candidates.is_empty() || capacity == 0 {
                Vec::new()
            } else {
                let ranked = ranking::rank(candidates.iter().copied(), department)?;
                ranked
                    .iter()
                    .take(capacity)
                    .map(|entry| entry.full_name().to_string())
                    .collect()
            };

            debug!(
                wave,
                department = %department.name,
                applied = candidates.len(),
                admitted = names.len(),
                capacity,
                "department wave evaluated"
            );

            departments.push(DepartmentIntake {
                department: department.name.clone(),
                applied: candidates.len(),
                admitted: names.len(),
                seats_left: capacity - names.len(),
            });
            plan.push(PlannedAdmission {
                department: &department.name,
                names,
            });
        }
        drop(partitions);

        commit(plan, roster, pool);

        Ok(WaveReport {
            wave,
            departments,
            unmatched,
            remaining: pool.len(),
        })
    }

    fn partition<'p>(
        &self,
        wave: usize,
        pool: &'p RemainingPool,
    ) -> (HashMap<&'p str, Vec<&'p Applicant>>, usize) {
        let mut partitions: HashMap<&str, Vec<&Applicant>> = HashMap::new();
        let mut unmatched = 0;

        for applicant in pool {
            match applicant.preference(wave) {
                Some(choice) if self.catalog.contains(choice) => {
                    partitions.entry(choice).or_default().push(applicant);
                }
                _ => unmatched += 1,
            }
        }

        (partitions, unmatched)
    }

    fn capacity(&self, admitted: usize) -> usize {
        let admitted = i64::try_from(admitted).unwrap_or(i64::MAX);
        usize::try_from(self.quota.saturating_sub(admitted)).unwrap_or(0)
    }
}

fn commit(plan: Vec<PlannedAdmission<'_>>, roster: &mut AdmissionRoster, pool: &mut RemainingPool) {
    let names: HashSet<&str> = plan
        .iter()
        .flat_map(|admission| admission.names.iter().map(String::as_str))
        .collect();
    let mut withdrawn = pool.withdraw(&names);

    for admission in &plan {
        let admitted = admission
            .names
            .iter()
            .filter_map(|name| withdrawn.remove(name))
            .collect();
        roster.admit(admission.department, admitted);
    }
}
