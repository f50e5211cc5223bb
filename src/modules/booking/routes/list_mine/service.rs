use super::types::response;
use crate::modules::auth::middleware::Auth;
use crate::modules::booking::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    repository::find_many_by_user_id(&ctx.db_conn.pool, auth.user.uid)
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)
        .map(response::Success::Bookings)
}
