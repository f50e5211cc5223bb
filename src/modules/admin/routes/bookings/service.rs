use super::types::response;
use crate::modules::booking::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)
        .map(response::Success::Bookings)
}
