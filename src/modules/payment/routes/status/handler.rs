use super::types::response;
use crate::types::Context;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    response::Success::Status {
        razorpay: ctx.payment.is_enabled(),
    }
}
