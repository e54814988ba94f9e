//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod notification;
pub mod report;

pub use notification::{NotificationEntity, NotificationWithReportEntity};
pub use report::ReportEntity;
