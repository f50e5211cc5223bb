use super::types::response;
use crate::modules::{booking, turf, user};
use crate::types::Context;
use std::collections::BTreeMap;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let mut sport_wise = BTreeMap::new();
    let mut total_turfs = 0;

    for sport in turf::repository::ALLOWED_SPORTS {
        let count = turf::repository::count_by_sport(&ctx.db_conn.pool, sport)
            .await
            .map_err(|_| response::Error::FailedToFetchStats)?;
        sport_wise.insert(sport.to_string(), count);
        total_turfs += count;
    }

    let total_bookings = booking::repository::count(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchStats)?;
    let total_users = user::repository::count(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchStats)?;
    let total_revenue = booking::repository::total_revenue(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchStats)?;

    Ok(response::Success::Stats(response::Stats {
        total_turfs,
        total_bookings,
        total_users,
        total_revenue,
        sport_wise,
    }))
}
