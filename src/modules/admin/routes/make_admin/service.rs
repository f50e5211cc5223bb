use super::types::{request, response};
use crate::modules::user::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::set_admin(&ctx.db_conn.pool, payload.user_id, true)
        .await
        .map_err(|_| response::Error::FailedToUpdateAdminStatus)?
        .then_some(response::Success::AdminGranted)
        .ok_or(response::Error::UserNotFound)
}
