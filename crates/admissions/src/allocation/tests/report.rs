use super::common::*;
use crate::allocation::catalog::DepartmentCatalog;
use crate::allocation::driver::allocate;
use crate::allocation::report::{roster_file_contents, write_roster_files, AllocationSummary};

fn summary() -> AllocationSummary {
    let catalog = DepartmentCatalog::standard();
    let outcome = allocate(
        catalog.clone(),
        2,
        3,
        vec![
            // Wave 0 fills Mathematics with Ivy only; Hal joins in wave 1 with a higher score.
            applicant("Ivy Irwin", [50.0, 50.0, 70.4, 50.0], 60.0, ["Mathematics", "Physics", "Biotech"]),
            applicant("Hal Hart", [50.0, 50.0, 88.0, 50.0], 40.0, ["Physics", "Mathematics", "Biotech"]),
            applicant("Gil Grey", [99.0, 50.0, 97.0, 50.0], 40.0, ["Physics", "Mathematics", "Biotech"]),
            applicant("Fay Fox", [98.0, 50.0, 98.0, 50.0], 40.0, ["Physics", "Mathematics", "Biotech"]),
        ],
    )
    .expect("allocation runs");
    AllocationSummary::from_outcome(&outcome, &catalog).expect("summary builds")
}

#[test]
fn display_order_reranks_across_waves() {
    let summary = summary();
    let mathematics = summary.department("Mathematics").expect("present");
    let names: Vec<&str> = mathematics
        .entries
        .iter()
        .map(|entry| entry.full_name.as_str())
        .collect();

    // Admission order was Ivy (wave 0) then Hal (wave 1); display follows score.
    assert_eq!(names, ["Hal Hart", "Ivy Irwin"]);
    assert_eq!(summary.departments.len(), 5);
    assert!(summary.unplaced.is_empty());
}

#[test]
fn human_listing_uses_one_decimal_mean() {
    let rendered = summary().render_human();
    assert!(rendered.starts_with("Biotech\n\nChemistry\n\nEngineering\n\nMathematics\n"));
    assert!(rendered.contains("Mathematics\nHal Hart 88.0\nIvy Irwin 70.4\n\n"));
    assert!(rendered.contains("Physics\nFay Fox 98.0\nGil Grey 98.0\n\n"));
}

#[test]
fn roster_files_use_two_decimal_effective_score() {
    let summary = summary();
    let mathematics = summary.department("Mathematics").expect("present");
    assert_eq!(
        roster_file_contents(mathematics),
        "Hal Hart 88.00\nIvy Irwin 70.40\n"
    );

    let dir = tempfile::tempdir().expect("temp dir");
    let written = write_roster_files(dir.path(), &summary).expect("files written");
    assert_eq!(written.len(), 5);

    let biotech = std::fs::read_to_string(dir.path().join("biotech.txt")).expect("biotech file");
    assert!(biotech.is_empty());
    let physics = std::fs::read_to_string(dir.path().join("physics.txt")).expect("physics file");
    assert_eq!(physics, "Fay Fox 98.00\nGil Grey 98.00\n");
}

#[test]
fn writing_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope");
    assert!(write_roster_files(&missing, &summary()).is_err());
}
