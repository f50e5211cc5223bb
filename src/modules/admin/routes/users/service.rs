use super::types::response;
use crate::modules::user::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchUsers)
        .map(response::Success::Users)
}
