//! Notification entity (database row mapping).
//!
//! Maps to the `notifications` table.

use chrono::{DateTime, Utc};
use domain::models::{Notification, NotificationFeedItem};
use sqlx::FromRow;

/// Database row mapping for the notifications table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: i64,
    pub report_id: i64,
    pub message: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Entity joined with the source report's location and severity, for the
/// recent-notifications feed.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationWithReportEntity {
    pub id: i64,
    pub report_id: i64,
    pub message: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub location_description: String,
    pub severity: String,
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        Self {
            id: entity.id,
            report_id: entity.report_id,
            message: entity.message,
            notification_type: entity.notification_type,
            created_at: entity.created_at,
            is_read: entity.is_read,
        }
    }
}

impl From<NotificationWithReportEntity> for NotificationFeedItem {
    fn from(entity: NotificationWithReportEntity) -> Self {
        Self {
            id: entity.id,
            report_id: entity.report_id,
            message: entity.message,
            notification_type: entity.notification_type,
            created_at: entity.created_at,
            is_read: entity.is_read,
            location_description: entity.location_description,
            severity: entity.severity,
        }
    }
}
