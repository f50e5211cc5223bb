use super::types::response;
use crate::modules::auth::middleware::Auth;
use crate::modules::owner::repository::{self, OwnerStatus};
use crate::modules::turf;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let owner = repository::find_by_uid(&ctx.db_conn.pool, auth.user.uid.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchTurfs)?
        .ok_or(response::Error::ProfileNotFound)?;

    if owner.status != OwnerStatus::Approved.to_string() {
        return Err(response::Error::NotApproved);
    }

    turf::repository::find_by_owner_id(&ctx.db_conn.pool, auth.user.uid)
        .await
        .map_err(|_| response::Error::FailedToFetchTurfs)
        .map(response::Success::Turfs)
}
