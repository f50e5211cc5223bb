use crate::modules;
use crate::types::{AppEnvironment, Context};
use crate::utils::{
    rate_limit::{self, RateLimiter},
    sanitize,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);
const MAX_BODY_BYTES: usize = 1024 * 1024;

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Route not found" })),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down gracefully");
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let max_requests = match ctx.app.environment {
            AppEnvironment::Production => 100,
            AppEnvironment::Development => 500,
        };
        let limiter = Arc::new(RateLimiter::new(RATE_LIMIT_WINDOW, max_requests));

        let allowed_origins = ctx
            .app
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();

        let router = Router::new()
            .route("/health", get(modules::health))
            .nest(
                "/api",
                modules::get_router()
                    .layer(middleware::from_fn(rate_limit::middleware))
                    .layer(Extension(limiter)),
            )
            .fallback(not_found)
            .with_state(ctx.clone())
            .layer(Extension(ctx.clone()))
            .layer(middleware::from_fn(sanitize::middleware))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                    ])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                    .allow_origin(allowed_origins)
                    .allow_credentials(true),
            );

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let listener = TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port))
            .await
            .unwrap();

        tracing::info!(
            "Server running on {}:{}",
            self.ctx.app.host,
            self.ctx.app.port
        );

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

        tracing::info!("Server closed");
    }
}
