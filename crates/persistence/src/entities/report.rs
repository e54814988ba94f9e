//! Wildfire report entity (database row mapping).
//!
//! Maps to the `wildfire_reports` table.

use chrono::{DateTime, Utc};
use domain::models::WildfireReport;
use sqlx::FromRow;

/// Database row mapping for the wildfire_reports table.
#[derive(Debug, Clone, FromRow)]
pub struct ReportEntity {
    pub id: i64,
    pub reporter_name: String,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub location_description: String,
    pub fire_size: String,
    pub severity: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub status: String,
    pub verified: bool,
}

impl From<ReportEntity> for WildfireReport {
    fn from(entity: ReportEntity) -> Self {
        Self {
            id: entity.id,
            reporter_name: entity.reporter_name,
            reporter_email: entity.reporter_email,
            reporter_phone: entity.reporter_phone,
            latitude: entity.latitude,
            longitude: entity.longitude,
            location_description: entity.location_description,
            fire_size: entity.fire_size,
            severity: entity.severity,
            description: entity.description,
            reported_at: entity.reported_at,
            status: entity.status,
            verified: entity.verified,
        }
    }
}
