pub mod artists;
pub mod error;
pub mod extract;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Serialize};
use showtime_db::query::SearchResults;

pub use error::ApiError;
pub use extract::JsonBody;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_term: String,
    pub results: SearchResults,
}

/// Flash-style outcome of a write.
#[derive(Debug, Serialize)]
pub struct Notice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
        }
    }

    pub fn with_id(id: i32, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: message.into(),
        }
    }
}
