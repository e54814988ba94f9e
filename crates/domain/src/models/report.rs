//! Wildfire report domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Severity classification of a reported fire.
///
/// Ordinal: Low < Medium < High < Critical. Drives both the derived
/// notification type and marker styling on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated size of a reported fire.
///
/// The canonical values are the full labels the submission form presents;
/// the short aliases are accepted for API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FireSize {
    #[serde(rename = "Small (< 1 acre)", alias = "Small")]
    Small,
    #[serde(rename = "Medium (1-10 acres)", alias = "Medium")]
    Medium,
    #[serde(rename = "Large (10-100 acres)", alias = "Large")]
    Large,
    #[serde(rename = "Massive (> 100 acres)", alias = "Massive")]
    Massive,
}

impl FireSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FireSize::Small => "Small (< 1 acre)",
            FireSize::Medium => "Medium (1-10 acres)",
            FireSize::Large => "Large (10-100 acres)",
            FireSize::Massive => "Massive (> 100 acres)",
        }
    }
}

impl std::fmt::Display for FireSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a report. New reports always start as Active;
/// transitions are driven by an external verification process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    #[default]
    Active,
    Contained,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Active => "Active",
            ReportStatus::Contained => "Contained",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted wildfire sighting report.
///
/// `severity`, `fire_size` and `status` are kept as stored text on the read
/// side: rows written by older deployments or external tooling may carry
/// values outside the current enumerations, and the map projector handles
/// those with a defensive default instead of failing the whole read path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildfireReport {
    pub id: i64,
    pub reporter_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
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

/// Request payload for submitting a new wildfire report.
///
/// Coordinates default to 0.0 in the submission form, so an exact zero on
/// either axis is treated as "unset" and rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub reporter_name: String,

    pub reporter_email: Option<String>,

    pub reporter_phone: Option<String>,

    #[validate(
        custom(function = "shared::validation::validate_latitude"),
        custom(function = "shared::validation::validate_coordinate_set")
    )]
    pub latitude: f64,

    #[validate(
        custom(function = "shared::validation::validate_longitude"),
        custom(function = "shared::validation::validate_coordinate_set")
    )]
    pub longitude: f64,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub location_description: String,

    pub fire_size: FireSize,

    pub severity: Severity,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: String,
}

/// Response payload for a successful report submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportResponse {
    pub id: i64,
}
