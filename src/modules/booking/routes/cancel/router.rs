use super::handler;
use crate::types::Context;
use axum::routing::{delete, patch, Router};
use std::sync::Arc;

// DELETE is a soft delete with the same cancellation semantics.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/:booking_id/cancel", patch(handler::handler))
        .route("/:booking_id", delete(handler::handler))
}
