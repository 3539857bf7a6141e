use serde::Serialize;
use tracing::info;

use super::catalog::DepartmentCatalog;
use super::domain::Applicant;
use super::error::AllocationError;
use super::roster::{AdmissionRoster, RemainingPool};
use super::wave::{WaveAllocator, WaveReport};

/// Number of priority choices each applicant supplies.
pub const DEFAULT_ADMISSION_STAGES: usize = 3;

/// Upper bound on waves accepted from configuration or request payloads.
pub const MAX_ADMISSION_STAGES: usize = 16;

/// Position of the driver in its linear wave sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStage {
    Wave(usize),
    Done,
}

/// Final, read-only result of an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationOutcome {
    pub roster: AdmissionRoster,
    pub unplaced: Vec<Applicant>,
    pub waves: Vec<WaveReport>,
}

/// Owns the roster and remaining pool and threads them through each wave in order.
#[derive(Debug)]
pub struct AllocationDriver {
    catalog: DepartmentCatalog,
    quota: i64,
    stages: usize,
    stage: AllocationStage,
    roster: AdmissionRoster,
    pool: RemainingPool,
    waves: Vec<WaveReport>,
}

impl AllocationDriver {
    /// Prepares a run; every applicant must carry a score for each catalog subject.
    pub fn new(
        catalog: DepartmentCatalog,
        quota: i64,
        stages: usize,
        applicants: Vec<Applicant>,
    ) -> Result<Self, AllocationError> {
        if stages == 0 {
            return Err(AllocationError::NoStages);
        }
        if stages > MAX_ADMISSION_STAGES {
            return Err(AllocationError::TooManyStages {
                requested: stages,
                max: MAX_ADMISSION_STAGES,
            });
        }

        for applicant in &applicants {
            if let Some(subject) = catalog
                .subjects()
                .iter()
                .find(|subject| applicant.exam_score(subject).is_none())
            {
                return Err(AllocationError::MissingSubjectScore {
                    applicant: applicant.full_name.clone(),
                    subject: subject.clone(),
                });
            }
        }

        let pool = RemainingPool::from_applicants(applicants)?;

        Ok(Self {
            catalog,
            quota,
            stages,
            stage: AllocationStage::Wave(0),
            roster: AdmissionRoster::new(),
            pool,
            waves: Vec::new(),
        })
    }

    pub fn stage(&self) -> AllocationStage {
        self.stage
    }

    pub fn catalog(&self) -> &DepartmentCatalog {
        &self.catalog
    }

    pub fn roster(&self) -> &AdmissionRoster {
        &self.roster
    }

    pub fn remaining(&self) -> &RemainingPool {
        &self.pool
    }

    pub fn waves(&self) -> &[WaveReport] {
        &self.waves
    }

    /// Runs the next wave and advances the stage.
    pub fn step(&mut self) -> Result<&WaveReport, AllocationError> {
        let wave = match self.stage {
            AllocationStage::Wave(wave) => wave,
            AllocationStage::Done => return Err(AllocationError::AlreadyCompleted(self.stages)),
        };

        let report = WaveAllocator::new(&self.catalog, self.quota).allocate(
            wave,
            &mut self.roster,
            &mut self.pool,
        )?;

        info!(
            wave,
            admitted = report.admitted(),
            unmatched = report.unmatched,
            remaining = report.remaining,
            "admission wave completed"
        );

        self.stage = if wave + 1 < self.stages {
            AllocationStage::Wave(wave + 1)
        } else {
            AllocationStage::Done
        };
        self.waves.push(report);
        match self.waves.last() {
            Some(report) => Ok(report),
            None => unreachable!("wave report pushed above"),
        }
    }

    /// Runs every remaining wave and freezes the result.
    pub fn run(mut self) -> Result<AllocationOutcome, AllocationError> {
        while self.stage != AllocationStage::Done {
            self.step()?;
        }
        Ok(self.finish())
    }

    /// Freezes the current state; applicants still in the pool are reported unplaced.
    pub fn finish(self) -> AllocationOutcome {
        AllocationOutcome {
            roster: self.roster,
            unplaced: self.pool.into_applicants(),
            waves: self.waves,
        }
    }
}

/// Convenience wrapper running a full allocation in one call.
pub fn allocate(
    catalog: DepartmentCatalog,
    quota: i64,
    stages: usize,
    applicants: Vec<Applicant>,
) -> Result<AllocationOutcome, AllocationError> {
    AllocationDriver::new(catalog, quota, stages, applicants)?.run()
}
