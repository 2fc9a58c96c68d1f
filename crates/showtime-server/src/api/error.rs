use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use showtime_db::{StoreError, ValidationErrors};

const GENERIC_FAILURE: &str = "An error occurred.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "ValidationErrors::is_empty")]
    pub fields: ValidationErrors,
}

/// Handler error: a status code plus the notice shown to the user.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    /// 400 carrying a single field error.
    pub fn bad_request(field: &'static str, message: impl Into<String>) -> Self {
        let mut fields = ValidationErrors::new();
        fields.add(field, message);
        Self::from(StoreError::Validation(fields))
    }

    /// Map a store failure. `notice` replaces the message of backend failures,
    /// whose cause is logged and never returned.
    pub fn from_store(err: StoreError, notice: impl Into<String>) -> Self {
        match err {
            StoreError::Validation(fields) => Self {
                status: StatusCode::BAD_REQUEST,
                body: ErrorResponse {
                    error: format!("Errors: {fields}"),
                    fields,
                },
            },
            err @ StoreError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                body: ErrorResponse {
                    error: err.to_string(),
                    fields: ValidationErrors::new(),
                },
            },
            StoreError::Persistence(e) => {
                let notice = notice.into();
                tracing::error!(error = %e, "{notice}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: ErrorResponse {
                        error: notice,
                        fields: ValidationErrors::new(),
                    },
                }
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::from_store(err, GENERIC_FAILURE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
