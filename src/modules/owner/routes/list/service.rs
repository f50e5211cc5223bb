use super::types::{request, response};
use crate::modules::owner::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(&ctx.db_conn.pool, payload.filters.status)
        .await
        .map_err(|_| response::Error::FailedToFetchOwners)
        .map(response::Success::Owners)
}
