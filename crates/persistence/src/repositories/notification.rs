//! Notification repository.
//!
//! Read path for the recent-notifications feed. Notification writes happen
//! inside the report transaction (see `ReportRepository`).

use sqlx::PgPool;

use crate::entities::notification::NotificationWithReportEntity;
use crate::metrics::QueryTimer;

/// Repository for notification operations.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the most recent notifications joined with their source report's
    /// location and severity, newest first.
    ///
    /// The inner join silently drops notifications whose report is gone;
    /// that cannot happen through this core but is not worth failing over.
    pub async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<NotificationWithReportEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_recent_notifications");

        let result = sqlx::query_as::<_, NotificationWithReportEntity>(
            r#"
            SELECT n.id, n.report_id, n.message, n.notification_type, n.created_at, n.is_read,
                   w.location_description, w.severity
            FROM notifications n
            JOIN wildfire_reports w ON n.report_id = w.id
            ORDER BY n.created_at DESC, n.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;

        timer.record();
        result
    }
}
