mod create_order;
mod status;
mod verify;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", create_order::get_router())
        .nest("/", verify::get_router())
        .nest("/", status::get_router())
}
