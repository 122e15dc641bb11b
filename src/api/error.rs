use crate::error::BeerError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

impl BeerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BeerError::AlreadyRegistered(_)
            | BeerError::InvalidBeer(_)
            | BeerError::InvalidRequest(_)
            | BeerError::StockExceeded { .. } => StatusCode::BAD_REQUEST,
            BeerError::NotFound(_) => StatusCode::NOT_FOUND,
            BeerError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for BeerError {
    fn from(rejection: JsonRejection) -> Self {
        BeerError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for BeerError {
    fn from(rejection: PathRejection) -> Self {
        BeerError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
