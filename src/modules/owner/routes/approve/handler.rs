use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    auth: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Path(owner_id): Path<String>,
) -> impl IntoResponse {
    service(ctx, auth, request::Payload { owner_id }).await
}
