use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use showtime_db::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod api;
pub mod config;

use config::ServerConfig;

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

/// API routes without middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let venue_routes = Router::new()
        .route(
            "/",
            get(api::venues::list_venues).post(api::venues::create_venue),
        )
        .route("/search", post(api::venues::search_venues))
        .route(
            "/{id}",
            get(api::venues::get_venue)
                .put(api::venues::update_venue)
                .delete(api::venues::delete_venue),
        )
        .route("/{id}/edit", get(api::venues::edit_venue));

    let artist_routes = Router::new()
        .route(
            "/",
            get(api::artists::list_artists).post(api::artists::create_artist),
        )
        .route("/search", post(api::artists::search_artists))
        .route(
            "/{id}",
            get(api::artists::get_artist)
                .put(api::artists::update_artist)
                .delete(api::artists::delete_artist),
        )
        .route("/{id}/edit", get(api::artists::edit_artist));

    let show_routes = Router::new().route(
        "/",
        get(api::shows::list_shows).post(api::shows::create_show),
    );

    let api_routes = Router::new()
        .nest("/venues", venue_routes)
        .nest("/artists", artist_routes)
        .nest("/shows", show_routes);

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Full application: routes plus tracing, CORS and security headers.
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        tracing::warn!("CORS_ORIGINS not set, cross-origin requests are refused");
        CorsLayer::new()
    } else {
        tracing::info!("CORS allowed origins: {:?}", config.cors_origins);
        CorsLayer::new().allow_origin(config.cors_origins.clone())
    }
    .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE]);

    router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
