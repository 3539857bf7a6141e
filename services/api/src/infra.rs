use admissions::allocation::{AllocationSettings, DepartmentCatalog};
use admissions::config::AdmissionsConfig;
use admissions::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Standard catalog unless a JSON override is supplied.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<DepartmentCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = DepartmentCatalog::from_path(path)?;
            info!(path = %path.display(), departments = catalog.departments().len(), "loaded department catalog");
            Ok(catalog)
        }
        None => Ok(DepartmentCatalog::standard()),
    }
}

pub(crate) fn allocation_settings(config: &AdmissionsConfig) -> Result<AllocationSettings, AppError> {
    Ok(AllocationSettings {
        catalog: load_catalog(config.catalog_path.as_deref())?,
        default_stages: config.stages,
    })
}
