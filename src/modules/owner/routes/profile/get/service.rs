use super::types::response;
use crate::modules::auth::middleware::Auth;
use crate::modules::owner::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    repository::find_by_uid(&ctx.db_conn.pool, auth.user.uid)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::ProfileNotFound)
        .map(response::Success::Profile)
}
