//! Repository implementations for database operations.

pub mod notification;
pub mod report;

pub use notification::NotificationRepository;
pub use report::{NewReport, ReportRepository, ReportStats};
