use super::handler;
use crate::types::Context;
use axum::routing::{delete, Router};
use std::sync::Arc;

// The wildcard must carry the same name as the first segment of the list
// route (one parameter name per position); the captured value here is the
// review id.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/:sport", delete(handler::handler))
}
