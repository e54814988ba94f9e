//! Domain models for Wildfire Watch.

pub mod notification;
pub mod report;

pub use notification::{Notification, NotificationFeedItem};
pub use report::{
    CreateReportRequest, CreateReportResponse, FireSize, ReportStatus, Severity, WildfireReport,
};
