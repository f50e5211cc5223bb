use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::review::{repository, service as review_service};
use crate::modules::turf::repository::Sport;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let review = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if review.user_id != auth.user.uid {
        return Err(response::Error::AccessDenied);
    }

    repository::delete_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    if let Ok(sport) = review.sport.parse::<Sport>() {
        review_service::refresh_turf_rating(ctx, sport, review.turf_id).await;
    }

    Ok(response::Success::ReviewDeleted)
}
