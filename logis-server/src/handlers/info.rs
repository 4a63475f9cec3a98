use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppContext;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "RAG Chatbot API is running",
        "endpoints": {
            "chat": "/api/chat",
            "health": "/health",
        },
    }))
}

pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "documents_loaded": ctx.documents_loaded(),
        "model": ctx.model(),
    }))
}
