use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::{ApiError, JsonBody, Notice};
use showtime_db::shows::{self, ShowForm, ShowListing};
use showtime_db::AppState;

/// GET /api/shows
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShowListing>>, ApiError> {
    Ok(Json(shows::list(&state.db).await?))
}

/// POST /api/shows
pub async fn create_show(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ShowForm>,
) -> Result<(StatusCode, Json<Notice>), ApiError> {
    let created = shows::create_show(&state.db, form)
        .await
        .map_err(|e| ApiError::from_store(e, "An error occurred. Show could not be listed."))?;

    Ok((
        StatusCode::CREATED,
        Json(Notice::with_id(created.id, "Show was successfully listed!")),
    ))
}
