//! Site registry: placement locations and their required hours.

use chrono::Utc;

use prac_core::entities::{DEFAULT_SITES, Site};
use prac_core::enums::{DeletePolicy, EntityType};
use prac_core::hours::validate_required_hours;
use prac_core::ids::{PREFIX_SITE, normalize_key, require_text};
use prac_core::responses::DeleteResponse;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::{lookup_key, query_count};
use crate::service::PracService;
use crate::updates::site::SiteUpdate;

const SELECT_COLS: &str = "site_id, name, required_hours, created_at, updated_at";

fn row_to_site(row: &libsql::Row) -> Result<Site, DatabaseError> {
    Ok(Site {
        site_id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        required_hours: row.get::<f64>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PracService {
    /// Register a site. `site_id` is generated (`sit-xxxxxxxx`) when not given.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank or taken name, negative or non-finite required
    /// hours, or a malformed or taken explicit id.
    pub async fn create_site(
        &self,
        site_id: Option<&str>,
        name: &str,
        required_hours: f64,
    ) -> Result<Site, DatabaseError> {
        let name = require_text(name, "name")?;
        let required_hours = validate_required_hours(required_hours)?;
        let site_id = match site_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let id = normalize_key(raw, "site_id")?;
                if self.site_id_taken(&id).await? {
                    return Err(DatabaseError::Validation(format!(
                        "site '{id}' already exists"
                    )));
                }
                id
            }
            None => self.db().generate_id(PREFIX_SITE).await?,
        };
        self.ensure_site_name_free(&name, None).await?;

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO sites (site_id, name, required_hours, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    site_id.as_str(),
                    name.as_str(),
                    required_hours,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::info!(%site_id, %name, required_hours, "created site");

        Ok(Site {
            site_id,
            name,
            required_hours,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// `NotFound` when no site has this id.
    pub async fn get_site(&self, site_id: &str) -> Result<Site, DatabaseError> {
        let site_id = lookup_key(site_id, "site_id");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sites WHERE site_id = ?1"),
                [site_id.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_site(&row),
            None => Err(DatabaseError::not_found(EntityType::Site, &site_id)),
        }
    }

    /// Find a site by id, falling back to a case-insensitive name match.
    ///
    /// # Errors
    ///
    /// `NotFound` when neither matches.
    pub async fn resolve_site(&self, id_or_name: &str) -> Result<Site, DatabaseError> {
        match self.get_site(id_or_name).await {
            Err(DatabaseError::NotFound { .. }) => {}
            other => return other,
        }
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sites WHERE name = ?1 COLLATE NOCASE"),
                [id_or_name.trim()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_site(&row),
            None => Err(DatabaseError::not_found(EntityType::Site, id_or_name.trim())),
        }
    }

    pub(crate) async fn site_id_taken(&self, site_id: &str) -> Result<bool, DatabaseError> {
        let count = query_count(
            self.db().conn(),
            "SELECT COUNT(*) FROM sites WHERE site_id = ?1",
            [site_id],
        )
        .await?;
        Ok(count > 0)
    }

    async fn ensure_site_name_free(
        &self,
        name: &str,
        except_id: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let count = query_count(
            self.db().conn(),
            "SELECT COUNT(*) FROM sites
             WHERE name = ?1 COLLATE NOCASE AND (?2 IS NULL OR site_id <> ?2)",
            libsql::params![name, except_id],
        )
        .await?;
        if count > 0 {
            return Err(DatabaseError::Validation(format!(
                "a site named '{name}' already exists"
            )));
        }
        Ok(())
    }

    /// Rename a site or change its required hours. Completion views pick the
    /// new requirement up on their next read.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` for a blank or taken name or
    /// invalid required hours.
    pub async fn update_site(
        &self,
        site_id: &str,
        update: SiteUpdate,
    ) -> Result<Site, DatabaseError> {
        let site_id = lookup_key(site_id, "site_id");
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            let name = require_text(name, "name")?;
            self.ensure_site_name_free(&name, Some(site_id.as_str())).await?;
            sets.push(format!("name = ?{idx}"));
            params.push(name.into());
            idx += 1;
        }
        if let Some(required_hours) = update.required_hours {
            let required_hours = validate_required_hours(required_hours)?;
            sets.push(format!("required_hours = ?{idx}"));
            params.push(required_hours.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_site(&site_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(site_id.as_str().into());
        let sql = format!("UPDATE sites SET {} WHERE site_id = ?{idx}", sets.join(", "));

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::not_found(EntityType::Site, &site_id));
        }
        tracing::info!(%site_id, "updated site");

        self.get_site(&site_id).await
    }

    /// Remove a site.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id. Under [`DeletePolicy::Restrict`], a
    /// `Validation` error naming the count when log entries still reference
    /// the site.
    pub async fn delete_site(
        &self,
        site_id: &str,
        policy: DeletePolicy,
    ) -> Result<DeleteResponse, DatabaseError> {
        let site_id = lookup_key(site_id, "site_id");
        let tx = self.db().conn().transaction().await?;

        let exists = query_count(
            &tx,
            "SELECT COUNT(*) FROM sites WHERE site_id = ?1",
            [site_id.as_str()],
        )
        .await?;
        if exists == 0 {
            return Err(DatabaseError::not_found(EntityType::Site, &site_id));
        }

        let dependents = query_count(
            &tx,
            "SELECT COUNT(*) FROM log_entries WHERE site_id = ?1",
            [site_id.as_str()],
        )
        .await?;

        let removed_entries = match policy {
            DeletePolicy::Restrict if dependents > 0 => {
                return Err(DatabaseError::Validation(format!(
                    "site '{site_id}' has {dependents} log entries; \
                     delete them first or use the cascade policy"
                )));
            }
            DeletePolicy::Restrict => 0,
            DeletePolicy::Cascade => {
                tx.execute(
                    "DELETE FROM log_entries WHERE site_id = ?1",
                    [site_id.as_str()],
                )
                .await?
            }
        };

        tx.execute("DELETE FROM sites WHERE site_id = ?1", [site_id.as_str()])
            .await?;
        tx.commit().await?;
        tracing::info!(%site_id, removed_entries, %policy, "deleted site");

        Ok(DeleteResponse {
            entity: EntityType::Site,
            id: site_id,
            removed_entries,
        })
    }

    /// All sites, ordered by name.
    pub async fn list_sites(&self) -> Result<Vec<Site>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM sites ORDER BY name COLLATE NOCASE, site_id"),
                (),
            )
            .await?;

        let mut sites = Vec::new();
        while let Some(row) = rows.next().await? {
            sites.push(row_to_site(&row)?);
        }
        Ok(sites)
    }

    /// Insert the four standard placement sites that are missing. Returns how
    /// many were added; running it again adds none.
    pub async fn seed_default_sites(&self) -> Result<u64, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let tx = self.db().conn().transaction().await?;
        let mut inserted = 0;
        for site in DEFAULT_SITES {
            inserted += tx
                .execute(
                    "INSERT OR IGNORE INTO sites (site_id, name, required_hours, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    libsql::params![
                        site.site_id,
                        site.name,
                        site.required_hours,
                        now.as_str(),
                        now.as_str()
                    ],
                )
                .await?;
        }
        tx.commit().await?;
        tracing::info!(inserted, "seeded default sites");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{log_hours, seed_site, seed_student, test_service};
    use crate::updates::site::SiteUpdateBuilder;

    #[tokio::test]
    async fn create_site_with_explicit_id() {
        let svc = test_service().await;
        let site = svc.create_site(Some("lab-a"), "Lab A", 40.0).await.unwrap();
        assert_eq!(site.site_id, "lab-a");

        let fetched = svc.get_site("lab-a").await.unwrap();
        assert_eq!(fetched.name, "Lab A");
        assert!((fetched.required_hours - 40.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn create_site_generates_id() {
        let svc = test_service().await;
        let site = svc.create_site(None, "Ward 7", 12.5).await.unwrap();
        assert!(site.site_id.starts_with("sit-"), "{}", site.site_id);
        assert!(svc.get_site(&site.site_id).await.is_ok());
    }

    #[tokio::test]
    async fn zero_required_hours_is_allowed() {
        let svc = test_service().await;
        assert!(svc.create_site(None, "Orientation", 0.0).await.is_ok());
    }

    #[tokio::test]
    async fn create_site_validation() {
        let svc = test_service().await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;

        for result in [
            svc.create_site(None, "lab a", 10.0).await,
            svc.create_site(Some("lab-a"), "Lab Z", 10.0).await,
            svc.create_site(None, "  ", 10.0).await,
            svc.create_site(None, "Lab B", -1.0).await,
            svc.create_site(None, "Lab C", f64::NAN).await,
            svc.create_site(Some("lab c"), "Lab C", 1.0).await,
        ] {
            assert!(matches!(result, Err(DatabaseError::Validation(_))), "{result:?}");
        }
    }

    #[tokio::test]
    async fn resolve_site_by_id_or_name() {
        let svc = test_service().await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        assert_eq!(svc.resolve_site("lab-a").await.unwrap().site_id, "lab-a");
        assert_eq!(svc.resolve_site("LAB A").await.unwrap().site_id, "lab-a");
        assert!(matches!(
            svc.resolve_site("Lab Q").await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_site_fields() {
        let svc = test_service().await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;

        let update = SiteUpdateBuilder::new()
            .name("Lab Alpha")
            .required_hours(60.0)
            .build();
        let updated = svc.update_site("lab-a", update).await.unwrap();
        assert_eq!(updated.name, "Lab Alpha");
        assert!((updated.required_hours - 60.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn rename_to_own_name_in_other_case_is_allowed() {
        let svc = test_service().await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        let update = SiteUpdateBuilder::new().name("LAB A").build();
        assert_eq!(svc.update_site("lab-a", update).await.unwrap().name, "LAB A");
    }

    #[tokio::test]
    async fn rename_to_taken_name_fails() {
        let svc = test_service().await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        seed_site(&svc, "lab-b", "Lab B", 40.0).await;
        let update = SiteUpdateBuilder::new().name("lab b").build();
        assert!(matches!(
            svc.update_site("lab-a", update).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_missing_site_is_not_found() {
        let svc = test_service().await;
        let update = SiteUpdateBuilder::new().required_hours(5.0).build();
        assert!(matches!(
            svc.update_site("nowhere", update).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_site_policies() {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        log_hours(&svc, "S001", "lab-a", "2026-01-05", 4.0).await;

        let blocked = svc.delete_site("lab-a", DeletePolicy::Restrict).await;
        assert!(matches!(blocked, Err(DatabaseError::Validation(_))));

        let resp = svc
            .delete_site("lab-a", DeletePolicy::Cascade)
            .await
            .unwrap();
        assert_eq!(resp.removed_entries, 1);
        assert!(svc.get_site("lab-a").await.is_err());
        assert!(svc.get_student("S001").await.is_ok());
    }

    #[tokio::test]
    async fn seed_default_sites_is_idempotent() {
        let svc = test_service().await;
        assert_eq!(svc.seed_default_sites().await.unwrap(), 4);
        assert_eq!(svc.seed_default_sites().await.unwrap(), 0);

        let sites = svc.list_sites().await.unwrap();
        let names: Vec<_> = sites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Site A - Hospital A",
                "Site B - Clinic B",
                "Site C - Laboratory C",
                "Site D - Community D",
            ]
        );
        let hospital = svc.get_site("site-a").await.unwrap();
        assert!((hospital.required_hours - 120.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn seeding_keeps_existing_sites() {
        let svc = test_service().await;
        seed_site(&svc, "site-a", "My Hospital", 10.0).await;
        assert_eq!(svc.seed_default_sites().await.unwrap(), 3);
        assert_eq!(svc.get_site("site-a").await.unwrap().name, "My Hospital");
    }
}
