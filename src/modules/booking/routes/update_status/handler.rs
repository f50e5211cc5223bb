use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    Path(booking_id): Path<String>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        auth,
        request::Payload {
            booking_id,
            status: body.status,
        },
    )
    .await
}
