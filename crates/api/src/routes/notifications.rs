//! Notification feed endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use domain::models::NotificationFeedItem;
use persistence::repositories::NotificationRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the notification feed.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsQuery {
    /// Number of notifications to return (1-100, default 10).
    pub limit: Option<i64>,
}

impl NotificationsQuery {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MIN_LIMIT: i64 = 1;
    pub const MAX_LIMIT: i64 = 100;

    /// Returns the effective limit, clamped to valid range.
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(Self::MIN_LIMIT, Self::MAX_LIMIT)
    }
}

/// List recent notifications joined with their report's location and
/// severity, newest first.
///
/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationsQuery>,
) -> Result<Json<Vec<NotificationFeedItem>>, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let items: Vec<NotificationFeedItem> = repo
        .list_recent(query.effective_limit())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(items))
}
