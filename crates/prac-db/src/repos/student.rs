//! Student registry: CRUD and search over the roster.

use chrono::Utc;

use prac_core::entities::Student;
use prac_core::enums::{DeletePolicy, EntityType};
use prac_core::ids::{normalize_key, require_text};
use prac_core::responses::DeleteResponse;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::{lookup_key, query_count};
use crate::service::PracService;
use crate::updates::student::StudentUpdate;

const SELECT_COLS: &str = "student_id, last_name, initials, created_at, updated_at";

pub(crate) fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        student_id: row.get::<String>(0)?,
        last_name: row.get::<String>(1)?,
        initials: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PracService {
    /// Register a student.
    ///
    /// # Errors
    ///
    /// `Validation` for a malformed key, an empty last name, or an id already
    /// on the roster.
    pub async fn create_student(
        &self,
        student_id: &str,
        last_name: &str,
        initials: &str,
    ) -> Result<Student, DatabaseError> {
        let student_id = normalize_key(student_id, "student_id")?;
        let last_name = require_text(last_name, "last_name")?;
        let initials = initials.trim().to_string();

        if self.student_exists(&student_id).await? {
            return Err(DatabaseError::Validation(format!(
                "student '{student_id}' already exists"
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO students (student_id, last_name, initials, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    student_id.as_str(),
                    last_name.as_str(),
                    initials.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::info!(%student_id, "created student");

        Ok(Student {
            student_id,
            last_name,
            initials,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// `NotFound` when no student has this id.
    pub async fn get_student(&self, student_id: &str) -> Result<Student, DatabaseError> {
        let student_id = lookup_key(student_id, "student_id");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM students WHERE student_id = ?1"),
                [student_id.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_student(&row),
            None => Err(DatabaseError::not_found(EntityType::Student, &student_id)),
        }
    }

    pub async fn student_exists(&self, student_id: &str) -> Result<bool, DatabaseError> {
        let count = query_count(
            self.db().conn(),
            "SELECT COUNT(*) FROM students WHERE student_id = ?1",
            [student_id],
        )
        .await?;
        Ok(count > 0)
    }

    /// Change a student's last name and/or initials.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for an empty last name.
    pub async fn update_student(
        &self,
        student_id: &str,
        update: StudentUpdate,
    ) -> Result<Student, DatabaseError> {
        let student_id = lookup_key(student_id, "student_id");
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref last_name) = update.last_name {
            let last_name = require_text(last_name, "last_name")?;
            sets.push(format!("last_name = ?{idx}"));
            params.push(last_name.into());
            idx += 1;
        }
        if let Some(ref initials) = update.initials {
            sets.push(format!("initials = ?{idx}"));
            params.push(initials.trim().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_student(&student_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(student_id.as_str().into());
        let sql = format!(
            "UPDATE students SET {} WHERE student_id = ?{idx}",
            sets.join(", ")
        );

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found(EntityType::Student, &student_id));
        }
        tracing::info!(%student_id, "updated student");

        self.get_student(&student_id).await
    }

    /// Remove a student.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id. Under [`DeletePolicy::Restrict`], a
    /// `Validation` error naming the count when log entries still reference
    /// the student.
    pub async fn delete_student(
        &self,
        student_id: &str,
        policy: DeletePolicy,
    ) -> Result<DeleteResponse, DatabaseError> {
        let student_id = lookup_key(student_id, "student_id");
        let tx = self.db().conn().transaction().await?;

        let exists = query_count(
            &tx,
            "SELECT COUNT(*) FROM students WHERE student_id = ?1",
            [student_id.as_str()],
        )
        .await?;
        if exists == 0 {
            return Err(DatabaseError::not_found(EntityType::Student, &student_id));
        }

        let dependents = query_count(
            &tx,
            "SELECT COUNT(*) FROM log_entries WHERE student_id = ?1",
            [student_id.as_str()],
        )
        .await?;

        let removed_entries = match policy {
            DeletePolicy::Restrict if dependents > 0 => {
                return Err(DatabaseError::Validation(format!(
                    "student '{student_id}' has {dependents} log entries; \
                     delete them first or use the cascade policy"
                )));
            }
            DeletePolicy::Restrict => 0,
            DeletePolicy::Cascade => {
                tx.execute(
                    "DELETE FROM log_entries WHERE student_id = ?1",
                    [student_id.as_str()],
                )
                .await?
            }
        };

        tx.execute(
            "DELETE FROM students WHERE student_id = ?1",
            [student_id.as_str()],
        )
        .await?;
        tx.commit().await?;
        tracing::info!(%student_id, removed_entries, %policy, "deleted student");

        Ok(DeleteResponse {
            entity: EntityType::Student,
            id: student_id,
            removed_entries,
        })
    }

    /// List students, optionally filtered by a case-insensitive substring of
    /// last name, initials, or id. Ordered by last name, then id.
    pub async fn list_students(
        &self,
        filter: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Student>, DatabaseError> {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        let sql = format!(
            "SELECT {SELECT_COLS} FROM students
             WHERE ?1 IS NULL
                OR instr(lower(last_name), lower(?1)) > 0
                OR instr(lower(initials), lower(?1)) > 0
                OR instr(lower(student_id), lower(?1)) > 0
             ORDER BY last_name COLLATE NOCASE, student_id
             LIMIT ?2"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![filter, i64::from(limit)])
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{log_hours, seed_site, seed_student, test_service};
    use crate::updates::student::StudentUpdateBuilder;

    #[tokio::test]
    async fn create_student_roundtrip() {
        let svc = test_service().await;
        let created = svc.create_student(" S001 ", " Smith ", "J").await.unwrap();
        assert_eq!(created.student_id, "S001");
        assert_eq!(created.last_name, "Smith");

        let fetched = svc.get_student("S001").await.unwrap();
        assert_eq!(fetched.student_id, created.student_id);
        assert_eq!(fetched.last_name, created.last_name);
        assert_eq!(fetched.initials, created.initials);
    }

    #[tokio::test]
    async fn numeric_ids_are_normalised() {
        let svc = test_service().await;
        svc.create_student("1042.0", "Nguyen", "T").await.unwrap();
        assert!(svc.get_student("1042").await.is_ok());
        assert!(svc.get_student("1042.0").await.is_ok());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_and_bad_input() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;

        let dup = svc.create_student("S001", "Jones", "").await.unwrap_err();
        assert!(matches!(dup, DatabaseError::Validation(_)));

        let blank = svc.create_student("S002", "   ", "").await.unwrap_err();
        assert!(matches!(blank, DatabaseError::Validation(_)));

        let bad_key = svc.create_student("S 003", "Lee", "").await.unwrap_err();
        assert!(matches!(bad_key, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn get_missing_student_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_student("S404").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_student_fields() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;

        let update = StudentUpdateBuilder::new()
            .last_name("Smyth")
            .initials("JA")
            .build();
        let updated = svc.update_student("S001", update).await.unwrap();
        assert_eq!(updated.last_name, "Smyth");
        assert_eq!(updated.initials, "JA");
    }

    #[tokio::test]
    async fn empty_update_returns_current() {
        let svc = test_service().await;
        let created = seed_student(&svc, "S001", "Smith").await;
        let same = svc
            .update_student("S001", StudentUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(same.last_name, created.last_name);
    }

    #[tokio::test]
    async fn update_missing_student_is_not_found() {
        let svc = test_service().await;
        let update = StudentUpdateBuilder::new().initials("X").build();
        let err = svc.update_student("S404", update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_rejects_blank_last_name() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        let update = StudentUpdateBuilder::new().last_name(" ").build();
        let err = svc.update_student("S001", update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_restrict_blocks_when_entries_exist() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        log_hours(&svc, "S001", "lab-a", "2026-01-05", 4.0).await;
        log_hours(&svc, "S001", "lab-a", "2026-01-06", 4.0).await;

        let err = svc
            .delete_student("S001", DeletePolicy::Restrict)
            .await
            .unwrap_err();
        match err {
            DatabaseError::Validation(msg) => assert!(msg.contains("2 log entries"), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(svc.get_student("S001").await.is_ok());
    }

    #[tokio::test]
    async fn delete_cascade_removes_entries() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        log_hours(&svc, "S001", "lab-a", "2026-01-05", 4.0).await;

        let resp = svc
            .delete_student("S001", DeletePolicy::Cascade)
            .await
            .unwrap();
        assert_eq!(resp.removed_entries, 1);
        assert!(svc.get_student("S001").await.is_err());
        assert_eq!(svc.overview().await.unwrap().log_entries, 0);
    }

    #[tokio::test]
    async fn delete_without_entries_succeeds_under_restrict() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        let resp = svc
            .delete_student("S001", DeletePolicy::Restrict)
            .await
            .unwrap();
        assert_eq!(resp.removed_entries, 0);
        assert_eq!(resp.entity, EntityType::Student);
    }

    #[tokio::test]
    async fn delete_missing_student_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .delete_student("S404", DeletePolicy::Cascade)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_orders_and_filters() {
        let svc = test_service().await;
        svc.create_student("S003", "brown", "A").await.unwrap();
        svc.create_student("S001", "Smith", "J").await.unwrap();
        svc.create_student("S002", "Adams", "K").await.unwrap();

        let all = svc.list_students(None, 50).await.unwrap();
        let ids: Vec<_> = all.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S002", "S003", "S001"]);

        let smith = svc.list_students(Some("SMI"), 50).await.unwrap();
        assert_eq!(smith.len(), 1);
        assert_eq!(smith[0].student_id, "S001");

        let by_id = svc.list_students(Some("s00"), 2).await.unwrap();
        assert_eq!(by_id.len(), 2);
    }
}
