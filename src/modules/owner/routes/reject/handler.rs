use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    auth: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Path(owner_id): Path<String>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        auth,
        request::Payload {
            owner_id,
            reason: body.reason,
        },
    )
    .await
}
