//! Notification domain model.
//!
//! A notification is derived from exactly one report at creation time and is
//! never updated in place by this core (only `is_read` changes, externally).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub report_id: i64,
    pub message: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// A notification joined with its source report's location and severity,
/// as served by the recent-notifications feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeedItem {
    pub id: i64,
    pub report_id: i64,
    pub message: String,
    pub notification_type: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub location_description: String,
    pub severity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_serialization() {
        let notification = Notification {
            id: 1,
            report_id: 7,
            message: "New wildfire reported: Critical severity in Hwy 2".to_string(),
            notification_type: "Alert".to_string(),
            created_at: Utc::now(),
            is_read: false,
        };
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains("\"reportId\":7"));
        assert!(json.contains("\"notificationType\":\"Alert\""));
        assert!(json.contains("\"isRead\":false"));
    }

    #[test]
    fn test_notification_feed_item_carries_join_columns() {
        let item = NotificationFeedItem {
            id: 1,
            report_id: 7,
            message: "New wildfire reported: Low severity in Pine Valley".to_string(),
            notification_type: "New Report".to_string(),
            created_at: Utc::now(),
            is_read: false,
            location_description: "Pine Valley".to_string(),
            severity: "Low".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"locationDescription\":\"Pine Valley\""));
        assert!(json.contains("\"severity\":\"Low\""));
    }
}
