//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, NaiveTime, Utc};
use schemars::schema_for;
use prac_core::completion::CompletionStatus;
use prac_core::entities::*;
use prac_core::enums::*;
use prac_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn student() -> Student {
    Student {
        student_id: "S001".into(),
        last_name: "Smith".into(),
        initials: "J".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(student_roundtrip, Student, student());

roundtrip_and_validate!(
    site_roundtrip,
    Site,
    Site {
        site_id: "lab-a".into(),
        name: "Lab A".into(),
        required_hours: 40.0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    log_entry_roundtrip,
    LogEntry,
    LogEntry {
        entry_id: "log-a3f8b2c1".into(),
        student_id: "S001".into(),
        site_id: "lab-a".into(),
        date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
        hours: 7.5,
        lecturer: Some("Dr. Okafor".into()),
        start_time: NaiveTime::from_hms_opt(9, 0, 0),
        end_time: NaiveTime::from_hms_opt(16, 30, 0),
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    ledger_row_roundtrip,
    LedgerRow,
    LedgerRow {
        student_id: "S001".into(),
        last_name: "Smith".into(),
        initials: "J".into(),
        site_id: "lab-a".into(),
        site_name: "Lab A".into(),
        date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
        hours: 4.0,
    }
);

roundtrip_and_validate!(
    import_summary_roundtrip,
    ImportSummary,
    ImportSummary {
        imported: 1,
        skipped_duplicates: 1,
        rejected: vec![RejectedRow {
            line: 3,
            reason: "student_id is required".into(),
        }],
        skipped_ids: vec!["S001".into()],
    }
);

roundtrip_and_validate!(
    student_summary_roundtrip,
    StudentSummary,
    StudentSummary {
        student: student(),
        sites: vec![CompletionStatus::compute("lab-a", "Lab A", 40.0, 40.0, 90.0)],
    }
);

roundtrip_and_validate!(
    near_completion_roundtrip,
    NearCompletionRow,
    NearCompletionRow {
        student_id: "S001".into(),
        last_name: "Smith".into(),
        initials: "J".into(),
        status: CompletionStatus::compute("lab-a", "Lab A", 37.0, 40.0, 90.0),
    }
);

roundtrip_and_validate!(
    overview_roundtrip,
    Overview,
    Overview {
        students: 12,
        sites: 4,
        log_entries: 30,
        total_hours: 211.5,
    }
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        entity: EntityType::Student,
        id: "S001".into(),
        removed_entries: 3,
    }
);

#[test]
fn completion_band_rejects_unknown_value() {
    let parsed = serde_json::from_str::<CompletionBand>("\"almost\"");
    assert!(parsed.is_err());
}
