mod approve;
mod list;
mod my_bookings;
mod my_turfs;
mod profile;
mod register;
mod reject;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", register::get_router())
        .nest("/", profile::get_router())
        .nest("/", list::get_router())
        .nest("/", approve::get_router())
        .nest("/", reject::get_router())
        .nest("/", my_turfs::get_router())
        .nest("/", my_bookings::get_router())
}
