use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::catalog::DepartmentCatalog;
use super::domain::Applicant;
use super::driver::{AllocationDriver, DEFAULT_ADMISSION_STAGES};
use super::report::AllocationSummary;
use crate::error::AppError;

/// Catalog and defaults shared by every allocation request.
#[derive(Debug, Clone)]
pub struct AllocationSettings {
    pub catalog: DepartmentCatalog,
    pub default_stages: usize,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            catalog: DepartmentCatalog::standard(),
            default_stages: DEFAULT_ADMISSION_STAGES,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub quota: i64,
    #[serde(default)]
    pub stages: Option<usize>,
    pub applicants: Vec<Applicant>,
}

/// Router exposing the stateless allocation endpoint.
pub fn allocation_router(settings: Arc<AllocationSettings>) -> Router {
    Router::new()
        .route("/api/v1/admissions/allocate", post(allocate_handler))
        .with_state(settings)
}

pub(crate) async fn allocate_handler(
    State(settings): State<Arc<AllocationSettings>>,
    Json(request): Json<AllocationRequest>,
) -> Result<Json<AllocationSummary>, AppError> {
    let AllocationRequest {
        quota,
        stages,
        applicants,
    } = request;

    let stages = stages.unwrap_or(settings.default_stages);
    let outcome =
        AllocationDriver::new(settings.catalog.clone(), quota, stages, applicants)?.run()?;
    let summary = AllocationSummary::from_outcome(&outcome, &settings.catalog)?;
    Ok(Json(summary))
}
