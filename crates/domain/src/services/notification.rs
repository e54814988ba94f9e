//! Notification derivation.
//!
//! Maps a newly created report to the notification record that accompanies
//! it. Pure: no I/O, independently testable given only the report values.

use serde::{Deserialize, Serialize};

use crate::models::report::Severity;

/// Notification type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Alert,
    #[serde(rename = "New Report")]
    NewReport,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Alert => "Alert",
            NotificationType::NewReport => "New Report",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The derived content of a notification, before the store assigns its id,
/// report reference and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub message: String,
    pub notification_type: NotificationType,
}

/// Derives the notification for a new report.
///
/// Critical reports produce an `Alert`; every other severity produces a
/// `New Report`. The message is generated once here and is immutable after
/// the notification is persisted.
pub fn derive(severity: Severity, location_description: &str) -> NotificationDraft {
    let notification_type = if severity == Severity::Critical {
        NotificationType::Alert
    } else {
        NotificationType::NewReport
    };

    NotificationDraft {
        message: format!(
            "New wildfire reported: {} severity in {}",
            severity, location_description
        ),
        notification_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_derives_alert() {
        let draft = derive(Severity::Critical, "Hwy 2");
        assert_eq!(draft.notification_type, NotificationType::Alert);
        assert_eq!(
            draft.message,
            "New wildfire reported: Critical severity in Hwy 2"
        );
    }

    #[test]
    fn test_non_critical_derives_new_report() {
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            let draft = derive(severity, "Pine Valley");
            assert_eq!(draft.notification_type, NotificationType::NewReport);
        }
    }

    #[test]
    fn test_message_interpolates_severity_and_location() {
        let draft = derive(Severity::Medium, "Highway 101, 2 miles north of Pine Valley");
        assert_eq!(
            draft.message,
            "New wildfire reported: Medium severity in Highway 101, 2 miles north of Pine Valley"
        );
    }

    #[test]
    fn test_notification_type_display() {
        assert_eq!(NotificationType::Alert.to_string(), "Alert");
        assert_eq!(NotificationType::NewReport.to_string(), "New Report");
    }

    #[test]
    fn test_notification_type_serialization() {
        assert_eq!(
            serde_json::to_string(&NotificationType::NewReport).unwrap(),
            "\"New Report\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationType::Alert).unwrap(),
            "\"Alert\""
        );
    }
}
