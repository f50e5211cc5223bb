use super::types::response;
use crate::modules::auth::middleware::Auth;
use crate::modules::{booking, turf};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let turfs = turf::repository::find_by_owner_id(&ctx.db_conn.pool, auth.user.uid)
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)?;

    let turf_names: Vec<String> = turfs.into_iter().map(|turf| turf.name).collect();
    if turf_names.is_empty() {
        return Ok(response::Success::Bookings(vec![]));
    }

    booking::repository::find_many_by_turf_names(&ctx.db_conn.pool, turf_names)
        .await
        .map_err(|_| response::Error::FailedToFetchBookings)
        .map(response::Success::Bookings)
}
