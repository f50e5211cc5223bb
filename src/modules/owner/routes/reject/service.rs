use super::types::{request, response};
use crate::modules::auth::middleware::AdminAuth;
use crate::modules::owner::repository;
use crate::types::Context;
use crate::utils::mail::templates;
use std::sync::Arc;

const DEFAULT_REASON: &str = "Application did not meet requirements";

pub async fn service(
    ctx: Arc<Context>,
    auth: AdminAuth,
    payload: request::Payload,
) -> response::Response {
    let reason = payload
        .reason
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| String::from(DEFAULT_REASON));

    let owner = repository::reject_by_uid(
        &ctx.db_conn.pool,
        payload.owner_id,
        auth.user.uid.clone(),
        reason.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToRejectOwner)?
    .ok_or(response::Error::OwnerNotFound)?;

    if let Err(err) = ctx
        .mailer
        .send(
            owner.email.as_str(),
            "TurfNow - Owner Application Update",
            templates::owner_rejected(templates::OwnerRejected {
                full_name: owner.full_name.as_str(),
                reason: reason.as_str(),
            }),
        )
        .await
    {
        tracing::error!("Failed to send rejection email: {:?}", err);
    }

    Ok(response::Success::OwnerRejected)
}
