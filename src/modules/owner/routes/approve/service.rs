use super::types::{request, response};
use crate::modules::auth::middleware::AdminAuth;
use crate::modules::owner::repository;
use crate::modules::user;
use crate::types::Context;
use crate::utils::mail::templates;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: AdminAuth,
    payload: request::Payload,
) -> response::Response {
    let owner = repository::approve_by_uid(
        &ctx.db_conn.pool,
        payload.owner_id.clone(),
        auth.user.uid.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToApproveOwner)?
    .ok_or(response::Error::OwnerNotFound)?;

    // Grant the owner claim; other claims stay untouched.
    user::repository::set_owner(&ctx.db_conn.pool, payload.owner_id, true)
        .await
        .map_err(|_| response::Error::FailedToApproveOwner)?;

    if let Err(err) = ctx
        .mailer
        .send(
            owner.email.as_str(),
            "TurfNow - Your Owner Account is Approved! 🎉",
            templates::owner_approved(templates::OwnerApproved {
                full_name: owner.full_name.as_str(),
                business_name: owner.business_name.as_str(),
            }),
        )
        .await
    {
        tracing::error!("Failed to send approval email: {:?}", err);
    }

    Ok(response::Success::OwnerApproved)
}
