//! End-to-end store workflows: roster import, site setup, hour logging,
//! completion views, export, and deletion policies, against both in-memory
//! and file-backed stores.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use prac_core::entities::NewLogEntry;
use prac_core::enums::{CompletionBand, DeletePolicy};
use prac_db::error::DatabaseError;
use prac_db::repos::ledger::LedgerFilter;
use prac_db::service::{PracService, ServiceSettings};
use prac_db::updates::site::SiteUpdateBuilder;

const CLASS_LIST: &str = "\
last_name,initials,student_id
Smith,J,S001
Adams,K,S002
Nguyen,T,1042.0
";

async fn test_service() -> PracService {
    PracService::new_local(":memory:", ServiceSettings::default())
        .await
        .unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn log(svc: &PracService, student: &str, site: &str, date: &str, hours: f64) {
    svc.create_entry(NewLogEntry::new(student, site, day(date), hours))
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reimporting_a_class_list_changes_nothing() {
    let svc = test_service().await;
    let first = svc.import_roster_text(CLASS_LIST).await.unwrap();
    assert_eq!(first.imported, 3);

    let roster = svc.list_students(None, 100).await.unwrap();
    let second = svc.import_roster_text(CLASS_LIST).await.unwrap();
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped_duplicates, 3);
    assert_eq!(svc.list_students(None, 100).await.unwrap(), roster);

    assert!(svc.get_student("1042").await.is_ok());
}

#[tokio::test]
async fn import_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("class.csv");
    std::fs::write(&path, CLASS_LIST).unwrap();

    let svc = test_service().await;
    let summary = svc.import_roster_file(&path).await.unwrap();
    assert_eq!(summary.imported, 3);
    assert!(summary.rejected.is_empty());
}

#[tokio::test]
async fn missing_roster_file_is_not_a_validation_error() {
    let svc = test_service().await;
    let err = svc
        .import_roster_file(std::path::Path::new("/nonexistent/class.csv"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Tabular(_)));
    assert!(!err.is_user_error());
}

// ---------------------------------------------------------------------------
// Ledger and completion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dangling_references_never_reach_the_ledger() {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();

    let err = svc
        .create_entry(NewLogEntry::new("S404", "lab-a", day("2026-02-01"), 2.0))
        .await
        .unwrap_err();
    assert!(err.is_user_error());
    assert!(matches!(err, DatabaseError::Validation(_)));
    assert_eq!(svc.overview().await.unwrap().log_entries, 0);
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-1.5)]
#[case::not_a_number(f64::NAN)]
#[case::infinite(f64::INFINITY)]
#[tokio::test]
async fn unusable_hours_are_rejected(#[case] hours: f64) {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();

    let err = svc
        .create_entry(NewLogEntry::new("S001", "lab-a", day("2026-02-01"), hours))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Validation(_)), "{err}");
    assert_eq!(svc.overview().await.unwrap().log_entries, 0);
}

#[rstest]
#[case::just_short(39.999, CompletionBand::NearCompletion, false, true)]
#[case::exactly_met(40.0, CompletionBand::Complete, true, true)]
#[case::just_below_threshold(35.9985, CompletionBand::InProgress, false, false)]
#[case::at_threshold(36.0, CompletionBand::NearCompletion, false, true)]
#[tokio::test]
async fn completion_flags_use_unrounded_hours(
    #[case] hours: f64,
    #[case] band: CompletionBand,
    #[case] complete: bool,
    #[case] near: bool,
) {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
    log(&svc, "S001", "lab-a", "2026-02-01", hours).await;

    let status = svc.completion_for("S001", "lab-a").await.unwrap();
    assert_eq!(status.band, band);
    assert_eq!(status.complete, complete);
    assert_eq!(status.near_completion, near);
    assert_eq!(status.owed_hours > 0.0, !complete);
}

#[tokio::test]
async fn completion_is_recomputed_on_read() {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
    log(&svc, "S001", "lab-a", "2026-02-01", 10.0).await;
    log(&svc, "S001", "lab-a", "2026-02-02", 15.0).await;
    log(&svc, "S001", "lab-a", "2026-02-03", 15.0).await;

    let status = svc.completion_for("S001", "lab-a").await.unwrap();
    assert!((status.percent - 100.0).abs() < f64::EPSILON);
    assert!(status.near_completion);
    assert!(status.complete);

    svc.update_site(
        "lab-a",
        SiteUpdateBuilder::new().required_hours(50.0).build(),
    )
    .await
    .unwrap();
    let status = svc.completion_for("S001", "lab-a").await.unwrap();
    assert!((status.percent - 80.0).abs() < f64::EPSILON);
    assert_eq!(status.band, CompletionBand::InProgress);
    assert!((status.owed_hours - 10.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn export_filtered_by_site() {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
    svc.create_site(Some("ward-7"), "=Ward 7", 20.0).await.unwrap();
    log(&svc, "S001", "lab-a", "2026-02-01", 2.0).await;
    log(&svc, "S002", "ward-7", "2026-02-02", 3.0).await;
    log(&svc, "S002", "lab-a", "2026-02-03", 4.5).await;

    let csv = svc
        .export_entries(&LedgerFilter::default().site("lab-a"))
        .await
        .unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "student_id,last_name,initials,site_id,site_name,date,hours",
            "S002,Adams,K,lab-a,Lab A,2026-02-03,4.5",
            "S001,Smith,J,lab-a,Lab A,2026-02-01,2",
        ]
    );

    let ward = svc
        .export_entries(&LedgerFilter::default().site("ward-7"))
        .await
        .unwrap();
    assert!(ward.contains(",'=Ward 7,"), "{ward}");
}

#[tokio::test]
async fn export_keeps_keys_verbatim() {
    let svc = test_service().await;
    svc.create_student("-1042", "Smith", "J").await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
    log(&svc, "-1042", "lab-a", "2026-01-05", 2.0).await;

    let csv = svc.export_entries(&LedgerFilter::default()).await.unwrap();
    assert_eq!(
        csv.lines().nth(1),
        Some("-1042,Smith,J,lab-a,Lab A,2026-01-05,2")
    );
}

// ---------------------------------------------------------------------------
// Deletion policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn restrict_then_cascade() {
    let svc = test_service().await;
    svc.import_roster_text(CLASS_LIST).await.unwrap();
    svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
    log(&svc, "S001", "lab-a", "2026-02-01", 2.0).await;
    log(&svc, "S002", "lab-a", "2026-02-01", 2.0).await;

    let blocked = svc.delete_site("lab-a", DeletePolicy::default()).await;
    assert!(matches!(blocked, Err(DatabaseError::Validation(_))));
    assert_eq!(svc.overview().await.unwrap().log_entries, 2);

    let removed = svc
        .delete_site("lab-a", DeletePolicy::Cascade)
        .await
        .unwrap();
    assert_eq!(removed.removed_entries, 2);

    let overview = svc.overview().await.unwrap();
    assert_eq!((overview.sites, overview.log_entries), (0, 0));
    assert_eq!(overview.students, 3);
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("practrack.db");
    let path = path.to_str().unwrap();

    {
        let svc = PracService::new_local(path, ServiceSettings::default())
            .await
            .unwrap();
        svc.seed_default_sites().await.unwrap();
        svc.create_student("S001", "Smith", "J").await.unwrap();
        log(&svc, "S001", "site-d", "2026-02-01", 36.0).await;
    }

    let svc = PracService::new_local(path, ServiceSettings::default())
        .await
        .unwrap();
    let near = svc.near_completion(None).await.unwrap();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0].status.site_id, "site-d");
    assert!((near[0].status.percent - 90.0).abs() < f64::EPSILON);
}
