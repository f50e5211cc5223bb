use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::booking::repository::{self, BookingStatus};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let next = payload
        .status
        .as_deref()
        .and_then(|status| status.parse::<BookingStatus>().ok())
        .ok_or(response::Error::InvalidStatus)?;

    let booking = repository::find_by_id(&ctx.db_conn.pool, payload.booking_id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateBooking)?
        .ok_or(response::Error::BookingNotFound)?;

    if booking.user_id != auth.user.uid {
        return Err(response::Error::AccessDenied);
    }

    let current = booking
        .status
        .parse::<BookingStatus>()
        .map_err(|_| response::Error::FailedToUpdateBooking)?;

    if !current.can_transition_to(next) {
        return Err(response::Error::InvalidTransition(current, next));
    }

    let updated = repository::update_status(&ctx.db_conn.pool, payload.booking_id, current, next)
        .await
        .map_err(|_| response::Error::FailedToUpdateBooking)?;
    if !updated {
        // Lost a race: the booking moved on since we read it.
        return Err(response::Error::InvalidTransition(current, next));
    }

    Ok(response::Success::BookingUpdated)
}
