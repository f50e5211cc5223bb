mod bookings;
mod make_admin;
mod remove_admin;
mod stats;
mod users;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", bookings::get_router())
        .nest("/", stats::get_router())
        .nest("/", make_admin::get_router())
        .nest("/", remove_admin::get_router())
        .nest("/", users::get_router())
}
