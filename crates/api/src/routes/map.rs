//! Map rendering endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use domain::models::WildfireReport;
use domain::services::map::{self, MapFrame, MapMarker};
use persistence::repositories::ReportRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Everything the external map renderer needs: a framing request and one
/// marker per report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub frame: MapFrame,
    pub markers: Vec<MapMarker>,
}

/// Project all reports into map primitives.
///
/// GET /api/v1/map
pub async fn get_map(State(state): State<AppState>) -> Result<Json<MapResponse>, ApiError> {
    let repo = ReportRepository::new(state.pool.clone());
    let reports: Vec<WildfireReport> = repo
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(MapResponse {
        frame: map::frame(&reports),
        markers: map::project(&reports),
    }))
}
