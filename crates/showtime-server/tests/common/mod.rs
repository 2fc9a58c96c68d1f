// Shared test utilities for integration tests
#![allow(dead_code)]

use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use showtime_db::AppState;
use showtime_server::config::ServerConfig;
use std::sync::Arc;

/// Create a test AppState backed by a migrated in-memory SQLite database
pub async fn test_app_state() -> Arc<AppState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db: DatabaseConnection = Database::connect(opt).await.unwrap();
    showtime_migration::Migrator::up(&db, None).await.unwrap();
    Arc::new(AppState { db })
}

pub async fn test_server() -> TestServer {
    let state = test_app_state().await;
    TestServer::new(showtime_server::app(state, &ServerConfig::default())).unwrap()
}

pub fn musical_hop() -> Value {
    json!({
        "name": "The Musical Hop",
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae", "Folk"],
        "website": "https://www.themusicalhop.com",
        "seeking_talent": true,
        "seeking_description": "We are on the lookout for a local artist to play every two weeks."
    })
}

pub fn park_square() -> Value {
    json!({
        "name": "Park Square Live Music & Coffee",
        "city": "San Francisco",
        "state": "CA",
        "address": "34 Whiskey Moore Ave",
        "genres": ["Rock n Roll", "Jazz", "Classical", "Folk"]
    })
}

pub fn guns_n_petals() -> Value {
    json!({
        "name": "Guns N Petals",
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "genres": ["Rock n Roll"],
        "seeking_venue": true,
        "seeking_description": "Looking for shows to perform at in the San Francisco Bay Area!"
    })
}

/// POST a form and return the created id.
pub async fn create(server: &TestServer, path: &str, body: &Value) -> i64 {
    let resp = server.post(path).json(body).await;
    resp.assert_status(axum::http::StatusCode::CREATED);
    resp.json::<Value>()["id"].as_i64().unwrap()
}
