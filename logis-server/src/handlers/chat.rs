use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::json_error::{ErrorToResponse, JsonError};
use crate::AppContext;

pub const EMPTY_QUESTION: &str = "La question ne peut pas être vide";

const ANSWER_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn answered(response: String) -> Self {
        Self {
            response,
            success: true,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            response: String::new(),
            success: false,
            error: Some(error),
        }
    }
}

/// Pipeline failures are reported in the body with status 200; only invalid
/// requests get a 400.
pub async fn chat(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "chat request rejected");
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            return JsonError::new(rejection.body_text()).to_response(status);
        }
    };

    let question = match request.question.as_deref().map(str::trim) {
        Some(question) if !question.is_empty() => question,
        _ => return JsonError::bad_request(EMPTY_QUESTION),
    };

    tracing::info!(question, "chat question");
    match ctx.chain().invoke(question).await {
        Ok(answer) => {
            let preview: String = answer.chars().take(ANSWER_PREVIEW_CHARS).collect();
            tracing::info!(answer = %preview, "chat answer");
            Json(ChatResponse::answered(answer)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "chat pipeline failed");
            Json(ChatResponse::failed(err.to_string())).into_response()
        }
    }
}
