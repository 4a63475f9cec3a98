use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub trait ErrorToResponse: Serialize {
    fn to_response(&self, code: StatusCode) -> axum::response::Response {
        let mut response = Json(self).into_response();
        *response.status_mut() = code;
        response
    }
}

/// Body of every rejected request: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct JsonError {
    detail: String,
}

impl JsonError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> axum::response::Response {
        Self::new(detail).to_response(StatusCode::BAD_REQUEST)
    }
}

impl ErrorToResponse for JsonError {}
