mod cancel;
mod create;
mod list_for_user;
mod list_mine;
mod slots;
mod update_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", list_mine::get_router())
        .nest("/", list_for_user::get_router())
        .nest("/", create::get_router())
        .nest("/", cancel::get_router())
        .nest("/", update_status::get_router())
        .nest("/", slots::get_router())
}
