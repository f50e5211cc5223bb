use super::types::{request, response};
use crate::modules::user::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::set_admin(&ctx.db_conn.pool, payload.user_id, false)
        .await
        .map_err(|_| response::Error::FailedToRemoveAdmin)?
        .then_some(response::Success::AdminRevoked)
        .ok_or(response::Error::UserNotFound)
}
