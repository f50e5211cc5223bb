use super::types::{request, response};
use crate::modules::turf::repository::{self, Sport};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let sport = payload
        .sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;

    repository::delete_by_sport_and_id(&ctx.db_conn.pool, sport, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteTurf)
        .map(|_| response::Success::TurfDeleted)
}
