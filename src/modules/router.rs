use crate::types::Context;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/health", get(health))
        .nest("/turfs", super::turf::routes::get_router())
        .nest("/bookings", super::booking::routes::get_router())
        .nest("/reviews", super::review::routes::get_router())
        .nest("/admin", super::admin::routes::get_router())
        .nest("/owners", super::owner::routes::get_router())
        .nest("/payments", super::payment::routes::get_router())
}
