//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use plantilla_domain::error::{PlantillaError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PlantillaError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PlantillaError);

impl From<PlantillaError> for ApiError {
    fn from(err: PlantillaError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PlantillaError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PlantillaError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PlantillaError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            PlantillaError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
