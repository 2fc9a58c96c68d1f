use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, JsonBody, Notice, SearchRequest, SearchResponse};
use showtime_db::venues::{self, Location, VenueDetail, VenueForm};
use showtime_db::AppState;

/// Stored venue fields, used to prefill the edit form.
#[derive(Debug, Serialize)]
pub struct VenueRecord {
    pub id: i32,
    #[serde(flatten)]
    pub form: VenueForm,
}

/// GET /api/venues
pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Location>>, ApiError> {
    Ok(Json(venues::list_locations(&state.db).await?))
}

/// POST /api/venues/search
pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = venues::search(&state.db, &body.search_term, chrono::Utc::now()).await?;
    Ok(Json(SearchResponse {
        search_term: body.search_term,
        results,
    }))
}

/// GET /api/venues/:id
pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<VenueDetail>, ApiError> {
    Ok(Json(
        venues::get_detail(&state.db, id, chrono::Utc::now()).await?,
    ))
}

/// GET /api/venues/:id/edit
pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<VenueRecord>, ApiError> {
    let venue = venues::get(&state.db, id).await?;
    Ok(Json(VenueRecord {
        id: venue.id,
        form: VenueForm::from(venue),
    }))
}

/// POST /api/venues
pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<VenueForm>,
) -> Result<(StatusCode, Json<Notice>), ApiError> {
    let name = form.name.clone();
    let id = venues::create(&state.db, form).await.map_err(|e| {
        ApiError::from_store(
            e,
            format!("An error occurred. Venue {name} could not be listed."),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(Notice::with_id(
            id,
            format!("Venue {name} was successfully listed!"),
        )),
    ))
}

/// PUT /api/venues/:id
pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    JsonBody(form): JsonBody<VenueForm>,
) -> Result<Json<Notice>, ApiError> {
    let name = form.name.clone();
    let updated = venues::update(&state.db, id, form).await.map_err(|e| {
        ApiError::from_store(
            e,
            format!("An error occurred. Venue {name} could not be updated."),
        )
    })?;

    Ok(Json(Notice::with_id(
        updated.id,
        format!("Venue {} was successfully updated!", updated.name),
    )))
}

/// DELETE /api/venues/:id
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Notice>, ApiError> {
    let deleted = venues::delete(&state.db, id).await.map_err(|e| {
        ApiError::from_store(e, "An error occurred. Venue could not be deleted.")
    })?;

    Ok(Json(Notice::new(format!(
        "Venue {} was successfully deleted!",
        deleted.name
    ))))
}
