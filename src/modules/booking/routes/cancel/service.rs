use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::booking::repository::{self, BookingStatus};
use crate::types::Context;
use crate::utils::mail::templates;
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let booking = repository::find_by_id(&ctx.db_conn.pool, payload.booking_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCancelBooking)?
        .ok_or(response::Error::BookingNotFound)?;

    if booking.user_id != auth.user.uid {
        return Err(response::Error::AccessDenied);
    }

    let status = booking
        .status
        .parse::<BookingStatus>()
        .map_err(|_| response::Error::FailedToCancelBooking)?;
    if !status.occupies_slot() {
        return Err(response::Error::AlreadyCancelled);
    }

    // The status guard in the update makes a repeated cancel under
    // concurrency lose here rather than double-stamp cancelled_at.
    let cancelled = repository::cancel_by_id(&ctx.db_conn.pool, payload.booking_id)
        .await
        .map_err(|_| response::Error::FailedToCancelBooking)?;
    if !cancelled {
        return Err(response::Error::AlreadyCancelled);
    }

    if let Err(err) = ctx
        .mailer
        .send(
            booking.email.as_str(),
            "TurfNow - Booking Cancelled",
            templates::booking_cancellation(templates::BookingCancellation {
                customer_name: booking.email.split('@').next().unwrap_or(booking.email.as_str()),
                turf_name: booking.turf_name.as_str(),
                date: booking.booking_date.to_string().as_str(),
                time: booking.time_slot.as_str(),
            }),
        )
        .await
    {
        tracing::error!("Failed to send cancellation email: {:?}", err);
    }

    Ok(response::Success::BookingCancelled)
}
