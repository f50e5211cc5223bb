use super::types::{request, response};
use crate::modules::booking::repository;
use crate::types::Context;
use chrono::NaiveDate;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let date = payload
        .date
        .parse::<NaiveDate>()
        .map_err(|_| response::Error::InvalidDate)?;

    repository::find_booked_slots(&ctx.db_conn.pool, payload.turf_name, date)
        .await
        .map_err(|_| response::Error::FailedToFetchSlots)
        .map(response::Success::BookedSlots)
}
