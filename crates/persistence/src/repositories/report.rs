//! Wildfire report repository.
//!
//! Owns the write path for reports and the transactional pairing with their
//! derived notification, plus the read paths over `wildfire_reports`.

use domain::services::notification::NotificationDraft;
use serde::Serialize;
use sqlx::PgPool;

use crate::entities::report::ReportEntity;
use crate::metrics::QueryTimer;

/// Input for inserting a new report. Field values have already passed
/// request validation; enum-typed fields arrive as their stored text.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub reporter_name: String,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location_description: String,
    pub fire_size: String,
    pub severity: String,
    pub description: String,
}

/// Aggregate counts over all reports, as shown on the dashboard.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: i64,
    pub critical: i64,
    pub active: i64,
    pub verified: i64,
}

/// Repository for wildfire report operations.
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a report and its derived notification as one transaction.
    ///
    /// The notification references the id assigned to the report inside the
    /// same transaction; if either insert fails, both roll back. A reader can
    /// never observe a report without its notification (or the reverse).
    pub async fn create_with_notification(
        &self,
        input: NewReport,
        draft: &NotificationDraft,
    ) -> Result<ReportEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_report_with_notification");
        let result = self.insert_report_and_notification(input, draft).await;
        timer.record();
        result
    }

    async fn insert_report_and_notification(
        &self,
        input: NewReport,
        draft: &NotificationDraft,
    ) -> Result<ReportEntity, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, ReportEntity>(
            r#"
            INSERT INTO wildfire_reports (
                reporter_name, reporter_email, reporter_phone, latitude, longitude,
                location_description, fire_size, severity, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, reporter_name, reporter_email, reporter_phone, latitude, longitude,
                      location_description, fire_size, severity, description, reported_at,
                      status, verified
            "#,
        )
        .bind(&input.reporter_name)
        .bind(&input.reporter_email)
        .bind(&input.reporter_phone)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.location_description)
        .bind(&input.fire_size)
        .bind(&input.severity)
        .bind(&input.description)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO notifications (report_id, message, notification_type)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entity.id)
        .bind(&draft.message)
        .bind(draft.notification_type.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(entity)
    }

    /// List every report, newest first. Ties on `reported_at` break by
    /// insertion order (descending id).
    pub async fn list_all(&self) -> Result<Vec<ReportEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_reports");

        let result = sqlx::query_as::<_, ReportEntity>(
            r#"
            SELECT id, reporter_name, reporter_email, reporter_phone, latitude, longitude,
                   location_description, fire_size, severity, description, reported_at,
                   status, verified
            FROM wildfire_reports
            ORDER BY reported_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        timer.record();
        result
    }

    /// Aggregate counts for the dashboard.
    pub async fn stats(&self) -> Result<ReportStats, sqlx::Error> {
        let timer = QueryTimer::new("report_stats");

        let result = sqlx::query_as::<_, ReportStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE severity = 'Critical') AS critical,
                COUNT(*) FILTER (WHERE status = 'Active') AS active,
                COUNT(*) FILTER (WHERE verified) AS verified
            FROM wildfire_reports
            "#,
        )
        .fetch_one(&self.pool)
        .await;

        timer.record();
        result
    }
}
