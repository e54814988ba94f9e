//! Wildfire report endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use domain::models::{CreateReportRequest, CreateReportResponse, WildfireReport};
use domain::services::notification;
use persistence::repositories::{NewReport, ReportRepository, ReportStats};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_report_submitted;

/// Submit a new wildfire report.
///
/// POST /api/v1/reports
///
/// Validates the submission, then persists the report together with its
/// derived notification in a single transaction. Either both records exist
/// afterwards or neither does.
pub async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<CreateReportResponse>), ApiError> {
    request.validate()?;

    let draft = notification::derive(request.severity, &request.location_description);

    let repo = ReportRepository::new(state.pool.clone());
    let input = NewReport {
        reporter_name: request.reporter_name,
        reporter_email: request.reporter_email,
        reporter_phone: request.reporter_phone,
        latitude: request.latitude,
        longitude: request.longitude,
        location_description: request.location_description,
        fire_size: request.fire_size.as_str().to_string(),
        severity: request.severity.as_str().to_string(),
        description: request.description,
    };
    let entity = repo.create_with_notification(input, &draft).await?;

    record_report_submitted(&entity.severity);

    info!(
        report_id = entity.id,
        severity = %entity.severity,
        notification_type = %draft.notification_type,
        "Wildfire report created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse { id: entity.id }),
    ))
}

/// List all wildfire reports, newest first.
///
/// GET /api/v1/reports
pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<WildfireReport>>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let reports: Vec<WildfireReport> = repo
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(reports))
}

/// Aggregate report counts for the dashboard.
///
/// GET /api/v1/reports/stats
pub async fn report_stats(State(state): State<AppState>) -> Result<Json<ReportStats>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let stats = repo.stats().await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{FireSize, Severity};

    #[test]
    fn test_create_report_request_to_input_uses_stored_labels() {
        let request = CreateReportRequest {
            reporter_name: "A. Smith".to_string(),
            reporter_email: None,
            reporter_phone: None,
            latitude: 34.05,
            longitude: -118.24,
            location_description: "Hwy 2".to_string(),
            fire_size: FireSize::Large,
            severity: Severity::Critical,
            description: "Heavy smoke".to_string(),
        };

        assert_eq!(request.fire_size.as_str(), "Large (10-100 acres)");
        assert_eq!(request.severity.as_str(), "Critical");
    }

    #[test]
    fn test_create_report_response_serialization() {
        let response = CreateReportResponse { id: 42 };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{\"id\":42}");
    }
}
