use crate::infra::load_catalog;
use admissions::allocation::{
    load_applicants, read_quota, write_roster_files, AllocationDriver, AllocationSummary,
    MAX_ADMISSION_STAGES,
};
use admissions::config::{AdmissionsConfig, AppConfig};
use admissions::error::AppError;
use admissions::telemetry;
use clap::builder::RangedU64ValueParser;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct AllocateArgs {
    /// Seats per department. Read from stdin when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) quota: Option<i64>,
    /// Applicants file (defaults to ADMISSIONS_APPLICANTS or applicants.txt)
    #[arg(long)]
    pub(crate) applicants: Option<PathBuf>,
    /// Directory receiving one roster file per department
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Number of priority waves; each applicant must list this many departments
    #[arg(
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ADMISSION_STAGES as u64)
    )]
    pub(crate) stages: Option<usize>,
    /// JSON department catalog replacing the standard departments
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Also print each roster with one-decimal mean scores
    #[arg(long)]
    pub(crate) print: bool,
}

impl AllocateArgs {
    fn apply(&mut self, config: &mut AdmissionsConfig) {
        if let Some(path) = self.applicants.take() {
            config.applicants_path = path;
        }
        if let Some(dir) = self.output_dir.take() {
            config.output_dir = dir;
        }
        if let Some(stages) = self.stages.take() {
            config.stages = stages;
        }
        if let Some(path) = self.catalog.take() {
            config.catalog_path = Some(path);
        }
    }
}

pub(crate) fn run_allocate(mut args: AllocateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    args.apply(&mut config.admissions);

    telemetry::init(&config.telemetry)?;

    let quota = match args.quota {
        Some(quota) => quota,
        None => read_quota(std::io::stdin().lock())?,
    };

    let (summary, _) = allocate_from_files(&config.admissions, quota)?;
    if args.print {
        print!("{}", summary.render_human());
    }

    Ok(())
}

/// Reads applicants, runs every wave, and writes the roster files.
pub(crate) fn allocate_from_files(
    config: &AdmissionsConfig,
    quota: i64,
) -> Result<(AllocationSummary, Vec<PathBuf>), AppError> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let applicants = load_applicants(&config.applicants_path, &catalog, config.stages)?;
    info!(
        applicants = applicants.len(),
        quota,
        stages = config.stages,
        path = %config.applicants_path.display(),
        "starting allocation"
    );

    let outcome = AllocationDriver::new(catalog.clone(), quota, config.stages, applicants)?.run()?;
    let summary = AllocationSummary::from_outcome(&outcome, &catalog)?;
    let written = write_roster_files(&config.output_dir, &summary)?;

    info!(
        admitted = outcome.roster.total_admitted(),
        unplaced = outcome.unplaced.len(),
        files = written.len(),
        "allocation complete"
    );

    Ok((summary, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct AllocateCommand {
        #[command(flatten)]
        args: AllocateArgs,
    }

    fn config_in(dir: &std::path::Path) -> AdmissionsConfig {
        AdmissionsConfig {
            stages: 3,
            applicants_path: dir.join("applicants.txt"),
            output_dir: dir.to_path_buf(),
            catalog_path: None,
        }
    }

    #[test]
    fn allocates_from_applicant_file_and_writes_rosters() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("applicants.txt"),
            "Mary Poppins 80 70 90 60 75 Physics Mathematics Biotech\n\
             Huck Finn 60 60 60 60 95 Physics Chemistry Engineering\n",
        )
        .expect("fixture written");

        let (summary, written) =
            allocate_from_files(&config_in(dir.path()), 1).expect("allocation runs");

        assert_eq!(written.len(), 5);
        let physics = std::fs::read_to_string(dir.path().join("physics.txt")).expect("physics");
        assert_eq!(physics, "Huck Finn 95.00\n");
        let mathematics =
            std::fs::read_to_string(dir.path().join("mathematics.txt")).expect("mathematics");
        assert_eq!(mathematics, "Mary Poppins 90.00\n");
        assert!(summary.render_human().contains("Mathematics\nMary Poppins 90.0\n"));
    }

    #[test]
    fn malformed_input_aborts_before_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("applicants.txt"),
            "Mary Poppins 80 seventy 90 60 75 Physics Mathematics Biotech\n",
        )
        .expect("fixture written");

        let error = allocate_from_files(&config_in(dir.path()), 1).expect_err("rejected");
        assert!(matches!(error, AppError::Intake(_)));
        assert!(!dir.path().join("physics.txt").exists());
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut config = AdmissionsConfig {
            stages: 3,
            applicants_path: PathBuf::from("applicants.txt"),
            output_dir: PathBuf::from("."),
            catalog_path: None,
        };
        let mut args = AllocateArgs {
            stages: Some(2),
            output_dir: Some(PathBuf::from("out")),
            ..AllocateArgs::default()
        };

        args.apply(&mut config);

        assert_eq!(config.stages, 2);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.applicants_path, PathBuf::from("applicants.txt"));
    }

    #[test]
    fn stages_flag_is_range_checked() {
        for rejected in ["0", "17", "-1"] {
            assert!(
                AllocateCommand::try_parse_from(["admissions", "--stages", rejected]).is_err(),
                "--stages {rejected} should be rejected"
            );
        }

        let parsed = AllocateCommand::try_parse_from(["admissions", "--stages", "4"])
            .expect("valid stage count parses");
        assert_eq!(parsed.args.stages, Some(4));
    }
}
