use super::common::*;
use crate::allocation::catalog::DepartmentCatalog;
use crate::allocation::roster::{AdmissionRoster, RemainingPool};
use crate::allocation::wave::WaveAllocator;
use crate::allocation::AllocationError;

fn pool(applicants: Vec<crate::allocation::Applicant>) -> RemainingPool {
    RemainingPool::from_applicants(applicants).expect("unique names")
}

#[test]
fn admits_top_ranked_applicants_up_to_quota() {
    let catalog = DepartmentCatalog::standard();
    let mut roster = AdmissionRoster::new();
    let mut remaining = pool(vec![
        entrance_only("Ann Able", 70.0, ["Physics", "Chemistry", "Biotech"]),
        entrance_only("Ben Baker", 90.0, ["Physics", "Chemistry", "Biotech"]),
        entrance_only("Cat Cole", 80.0, ["Physics", "Chemistry", "Biotech"]),
    ]);

    let report = WaveAllocator::new(&catalog, 2)
        .allocate(0, &mut roster, &mut remaining)
        .expect("wave allocates");

    assert_eq!(names(roster.admitted("Physics")), ["Ben Baker", "Cat Cole"]);
    assert_eq!(names(&remaining.clone().into_applicants()), ["Ann Able"]);
    assert_eq!(report.admitted(), 2);
    assert_eq!(report.remaining, 1);

    let physics = report
        .departments
        .iter()
        .find(|intake| intake.department == "Physics")
        .expect("physics reported");
    assert_eq!(physics.applied, 3);
    assert_eq!(physics.seats_left, 0);
}

#[test]
fn full_department_is_skipped_in_later_waves() {
    let catalog = DepartmentCatalog::standard();
    let mut roster = AdmissionRoster::new();
    let mut remaining = pool(vec![
        entrance_only("Ann Able", 70.0, ["Physics", "Physics", "Physics"]),
        entrance_only("Ben Baker", 90.0, ["Physics", "Physics", "Physics"]),
    ]);
    let allocator = WaveAllocator::new(&catalog, 1);

    allocator
        .allocate(0, &mut roster, &mut remaining)
        .expect("wave 0");
    let second = allocator
        .allocate(1, &mut roster, &mut remaining)
        .expect("wave 1");

    assert_eq!(names(roster.admitted("Physics")), ["Ben Baker"]);
    assert_eq!(second.admitted(), 0);
    assert!(remaining.contains("Ann Able"));
}

#[test]
fn non_positive_quota_admits_nobody() {
    let catalog = DepartmentCatalog::standard();
    for quota in [0, -3] {
        let mut roster = AdmissionRoster::new();
        let mut remaining = pool(vec![entrance_only(
            "Ann Able",
            99.0,
            ["Physics", "Chemistry", "Biotech"],
        )]);

        let report = WaveAllocator::new(&catalog, quota)
            .allocate(0, &mut roster, &mut remaining)
            .expect("wave allocates");

        assert_eq!(report.admitted(), 0);
        assert_eq!(roster.total_admitted(), 0);
        assert_eq!(remaining.len(), 1);
    }
}

#[test]
fn unknown_department_preference_yields_no_match() {
    let catalog = DepartmentCatalog::standard();
    let mut roster = AdmissionRoster::new();
    let mut remaining = pool(vec![entrance_only(
        "Ann Able",
        99.0,
        ["Astrology", "Chemistry", "Biotech"],
    )]);

    let report = WaveAllocator::new(&catalog, 5)
        .allocate(0, &mut roster, &mut remaining)
        .expect("unknown department is not an error");

    assert_eq!(report.unmatched, 1);
    assert_eq!(report.admitted(), 0);
    assert!(remaining.contains("Ann Able"));
}

#[test]
fn departments_rank_independently_within_a_wave() {
    let catalog = DepartmentCatalog::standard();
    let mut roster = AdmissionRoster::new();
    // Chemistry mean for Dee is 100 while her entrance score is low; Physics uses Physics+Math.
    let mut remaining = pool(vec![
        applicant("Dee Dunn", [10.0, 100.0, 10.0, 10.0], 20.0, ["Chemistry", "Physics", "Biotech"]),
        applicant("Eve Eck", [95.0, 10.0, 85.0, 10.0], 30.0, ["Physics", "Chemistry", "Biotech"]),
        applicant("Fay Fox", [10.0, 90.0, 10.0, 10.0], 50.0, ["Chemistry", "Physics", "Biotech"]),
    ]);

    WaveAllocator::new(&catalog, 1)
        .allocate(0, &mut roster, &mut remaining)
        .expect("wave allocates");

    assert_eq!(names(roster.admitted("Chemistry")), ["Dee Dunn"]);
    assert_eq!(names(roster.admitted("Physics")), ["Eve Eck"]);
    assert_eq!(names(&remaining.into_applicants()), ["Fay Fox"]);
}

#[test]
fn ranking_failure_leaves_state_untouched() {
    let catalog = DepartmentCatalog::standard();
    let mut roster = AdmissionRoster::new();
    let mut incomplete = entrance_only("Gus Gray", 99.0, ["Physics", "Physics", "Physics"]);
    incomplete.exam_scores.retain(|exam| exam.subject != "Math");
    let mut remaining = pool(vec![
        entrance_only("Ann Able", 70.0, ["Chemistry", "Physics", "Physics"]),
        incomplete,
    ]);

    let error = WaveAllocator::new(&catalog, 3)
        .allocate(0, &mut roster, &mut remaining)
        .expect_err("missing subject fails the wave");

    assert!(matches!(error, AllocationError::MissingSubjectScore { .. }));
    assert_eq!(roster.total_admitted(), 0);
    assert_eq!(remaining.len(), 2);
}
