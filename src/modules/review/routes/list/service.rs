use super::types::{request, response};
use crate::modules::review::repository;
use crate::modules::turf::repository::Sport;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let sport = payload
        .sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;

    repository::find_many_by_turf(&ctx.db_conn.pool, sport, payload.turf_id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)
        .map(response::Success::Reviews)
}
