use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, JsonBody, Notice, SearchRequest, SearchResponse};
use showtime_db::artists::{self, ArtistDetail, ArtistForm};
use showtime_db::query::Summary;
use showtime_db::AppState;

/// Stored artist fields, used to prefill the edit form.
#[derive(Debug, Serialize)]
pub struct ArtistRecord {
    pub id: i32,
    #[serde(flatten)]
    pub form: ArtistForm,
}

/// GET /api/artists
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Summary>>, ApiError> {
    Ok(Json(artists::list(&state.db).await?))
}

/// POST /api/artists/search
pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = artists::search(&state.db, &body.search_term, chrono::Utc::now()).await?;
    Ok(Json(SearchResponse {
        search_term: body.search_term,
        results,
    }))
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistDetail>, ApiError> {
    Ok(Json(
        artists::get_detail(&state.db, id, chrono::Utc::now()).await?,
    ))
}

/// GET /api/artists/:id/edit
pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ArtistRecord>, ApiError> {
    let artist = artists::get(&state.db, id).await?;
    Ok(Json(ArtistRecord {
        id: artist.id,
        form: ArtistForm::from(artist),
    }))
}

/// POST /api/artists
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ArtistForm>,
) -> Result<(StatusCode, Json<Notice>), ApiError> {
    let name = form.name.clone();
    let id = artists::create(&state.db, form).await.map_err(|e| {
        ApiError::from_store(
            e,
            format!("An error occurred. Artist {name} could not be listed."),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(Notice::with_id(
            id,
            format!("Artist {name} was successfully listed!"),
        )),
    ))
}

/// PUT /api/artists/:id
pub async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    JsonBody(form): JsonBody<ArtistForm>,
) -> Result<Json<Notice>, ApiError> {
    let name = form.name.clone();
    let updated = artists::update(&state.db, id, form).await.map_err(|e| {
        ApiError::from_store(
            e,
            format!("An error occurred. Artist {name} could not be updated."),
        )
    })?;

    Ok(Json(Notice::with_id(
        updated.id,
        format!("Artist {} was successfully updated!", updated.name),
    )))
}

/// DELETE /api/artists/:id
pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Notice>, ApiError> {
    let deleted = artists::delete(&state.db, id).await.map_err(|e| {
        ApiError::from_store(e, "An error occurred. Artist could not be deleted.")
    })?;

    Ok(Json(Notice::new(format!(
        "Artist {} was successfully deleted!",
        deleted.name
    ))))
}
