use super::service::service;
use super::types::request;
use crate::types::Context;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(sport): Path<String>,
    Query(filters): Query<request::Filters>,
) -> impl IntoResponse {
    service(ctx, request::Payload { sport, filters }).await
}
