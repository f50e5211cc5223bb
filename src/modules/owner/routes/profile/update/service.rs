use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::owner::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    repository::update_profile_by_uid(
        &ctx.db_conn.pool,
        auth.user.uid,
        repository::UpdateOwnerProfilePayload {
            full_name: payload.full_name,
            phone: payload.phone,
            business_name: payload.business_name,
            business_address: payload.business_address,
            city: payload.city,
            description: payload.description,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)?
    .ok_or(response::Error::ProfileNotFound)
    .map(|_| response::Success::ProfileUpdated)
}
