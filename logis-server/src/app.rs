use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::handlers::{
    chat::chat,
    info::{health, root},
};
use crate::{AppConfig, AppContext, ConfigError};

pub struct AppBuilder {
    app: Router,
}

impl AppBuilder {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        let app = Router::new()
            .route("/", get(root))
            .route("/health", get(health))
            .route("/api/chat", post(chat))
            .with_state(ctx);
        Self { app }
    }

    pub fn with_body_limit(self, max_bytes: usize) -> Self {
        Self {
            app: self.app.layer(RequestBodyLimitLayer::new(max_bytes)),
        }
    }

    pub fn with_trace_layer(self) -> Self {
        Self {
            app: self.app.layer(TraceLayer::new_for_http()),
        }
    }

    /// Credentials are allowed, so methods and headers are mirrored from the
    /// preflight instead of using wildcards.
    pub fn with_cors_layer(self, origins: Vec<HeaderValue>) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);
        Self {
            app: self.app.layer(cors_layer),
        }
    }

    pub fn build(self) -> Router {
        self.app
    }
}

/// The fully layered router for `config`.
pub fn router(ctx: Arc<AppContext>, config: &AppConfig) -> Result<Router, ConfigError> {
    let origins = config.origin_headers()?;
    Ok(AppBuilder::new(ctx)
        .with_body_limit(config.max_body_bytes)
        .with_cors_layer(origins)
        .with_trace_layer()
        .build())
}

pub async fn serve(app: Router, address: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}
