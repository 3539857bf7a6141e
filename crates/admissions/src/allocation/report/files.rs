use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use super::views::{AllocationSummary, DepartmentRosterView};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write roster file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File body for one department: `name effective` with two decimals per line.
pub fn roster_file_contents(view: &DepartmentRosterView) -> String {
    let mut contents = String::new();
    for entry in &view.entries {
        let _ = writeln!(contents, "{} {:.2}", entry.full_name, entry.effective_score);
    }
    contents
}

/// Writes `<department>.txt` for every department, including empty rosters.
pub fn write_roster_files(
    dir: &Path,
    summary: &AllocationSummary,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(summary.departments.len());

    for view in &summary.departments {
        let path = dir.join(format!("{}.txt", view.file_stem));
        std::fs::write(&path, roster_file_contents(view)).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(department = %view.department, admitted = view.entries.len(), path = %path.display(), "roster written");
        written.push(path);
    }

    Ok(written)
}
