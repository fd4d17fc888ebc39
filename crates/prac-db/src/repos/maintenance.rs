//! Store-wide maintenance.

use prac_core::entities::DEFAULT_SITES;
use prac_core::enums::{EntityType, SiteRetention};
use prac_core::responses::ResetResponse;

use crate::error::DatabaseError;
use crate::service::PracService;

impl PracService {
    /// Delete every log entry and student, and the sites `sites` does not
    /// retain. Runs in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any delete fails; nothing is removed then.
    pub async fn reset_data(&self, sites: SiteRetention) -> Result<ResetResponse, DatabaseError> {
        let clear = |entity: EntityType| format!("DELETE FROM {}", entity.table());

        // Entries first: both parents restrict deletes while entries exist.
        let tx = self.db().conn().transaction().await?;
        let entries_removed = tx.execute(&clear(EntityType::LogEntry), ()).await?;
        let students_removed = tx.execute(&clear(EntityType::Student), ()).await?;
        let sites_removed = match sites {
            SiteRetention::KeepAll => 0,
            SiteRetention::RemoveAll => tx.execute(&clear(EntityType::Site), ()).await?,
            SiteRetention::KeepDefaults => {
                let placeholders = (1..=DEFAULT_SITES.len())
                    .map(|idx| format!("?{idx}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let sql = format!(
                    "{} WHERE site_id NOT IN ({placeholders})",
                    clear(EntityType::Site)
                );
                let ids = DEFAULT_SITES.iter().map(|site| site.site_id);
                tx.execute(&sql, libsql::params_from_iter(ids)).await?
            }
        };
        tx.commit().await?;
        tracing::warn!(
            entries_removed,
            students_removed,
            sites_removed,
            retention = %sites,
            "reset store"
        );

        Ok(ResetResponse {
            students_removed,
            sites_removed,
            entries_removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{log_hours, seed_site, seed_student, test_service};

    async fn populated() -> PracService {
        let svc = test_service().await;
        seed_student(&svc, "S001", "Smith").await;
        seed_student(&svc, "S002", "Adams").await;
        seed_site(&svc, "lab-a", "Lab A", 40.0).await;
        log_hours(&svc, "S001", "lab-a", "2026-01-05", 3.0).await;
        svc
    }

    #[tokio::test]
    async fn reset_everything() {
        let svc = populated().await;
        let resp = svc.reset_data(SiteRetention::RemoveAll).await.unwrap();
        assert_eq!(
            resp,
            ResetResponse {
                students_removed: 2,
                sites_removed: 1,
                entries_removed: 1,
            }
        );
        let overview = svc.overview().await.unwrap();
        assert_eq!((overview.students, overview.sites, overview.log_entries), (0, 0, 0));
    }

    #[tokio::test]
    async fn reset_keeping_sites() {
        let svc = populated().await;
        let resp = svc.reset_data(SiteRetention::KeepAll).await.unwrap();
        assert_eq!(resp.sites_removed, 0);
        assert_eq!(svc.list_sites().await.unwrap().len(), 1);
        assert!(svc.list_students(None, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_keeps_standard_sites_and_drops_custom_ones() {
        let svc = populated().await;
        assert_eq!(svc.seed_default_sites().await.unwrap(), 4);
        log_hours(&svc, "S002", "site-b", "2026-01-06", 2.0).await;

        let resp = svc.reset_data(SiteRetention::default()).await.unwrap();
        assert_eq!(
            resp,
            ResetResponse {
                students_removed: 2,
                sites_removed: 1,
                entries_removed: 2,
            }
        );
        let ids: Vec<String> = svc
            .list_sites()
            .await
            .unwrap()
            .into_iter()
            .map(|site| site.site_id)
            .collect();
        assert_eq!(ids, ["site-a", "site-b", "site-c", "site-d"]);
    }
}
