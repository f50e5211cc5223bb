use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::booking::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    // Callers may only read their own bookings.
    if auth.user.uid != payload.user_id {
        return Err(response::Error::AccessDenied);
    }

    repository::find_many_by_user_id(&ctx.db_conn.pool, payload.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)
        .map(response::Success::Bookings)
}
