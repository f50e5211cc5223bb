use super::types::{request, response};
use crate::modules::auth::middleware::Auth;
use crate::modules::booking::repository::{self, is_allowed_time_slot};
use crate::modules::turf::repository::Sport;
use crate::types::Context;
use crate::utils::mail::templates;
use bigdecimal::{BigDecimal, FromPrimitive};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

fn is_bookable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

fn customer_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn booking_reference(id: &str) -> String {
    id.chars().take(8).collect::<String>().to_uppercase()
}

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    let (turf, time_slot, booking_date, sport) = match (
        payload.booking,
        payload.time,
        payload.booking_date,
        payload.sport,
    ) {
        (Some(turf), Some(time), Some(date), Some(sport)) => (turf, time, date, sport),
        _ => return Err(response::Error::MissingFields),
    };

    let turf_name = turf
        .name
        .filter(|name| !name.is_empty())
        .ok_or(response::Error::MissingTurfName)?;

    let sport = sport
        .parse::<Sport>()
        .map_err(|_| response::Error::InvalidSport)?;

    if !is_allowed_time_slot(time_slot.as_str()) {
        return Err(response::Error::InvalidTimeSlot);
    }

    let booking_date = booking_date
        .parse::<NaiveDate>()
        .map_err(|_| response::Error::DateInThePast)?;
    if !is_bookable(booking_date, Utc::now().date_naive()) {
        return Err(response::Error::DateInThePast);
    }

    let booking = repository::create(
        &ctx.db_conn.pool,
        repository::CreateBookingPayload {
            user_id: auth.user.uid.clone(),
            email: auth.user.email.clone(),
            turf_name: turf_name.clone(),
            turf_image: turf.image,
            turf_address: turf.address,
            turf_price: turf
                .price_per_hour
                .and_then(BigDecimal::from_f64)
                .unwrap_or_else(|| BigDecimal::from(0)),
            sport,
            time_slot: time_slot.clone(),
            booking_date,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::SlotTaken => response::Error::SlotAlreadyBooked,
        repository::Error::UnexpectedError => response::Error::FailedToCreateBooking,
    })?;

    // Notification delivery never fails the booking.
    if let Err(err) = ctx
        .mailer
        .send(
            auth.user.email.as_str(),
            "TurfNow - Booking Confirmation 🏟️",
            templates::booking_confirmation(templates::BookingConfirmation {
                customer_name: customer_name(auth.user.email.as_str()),
                turf_name: turf_name.as_str(),
                date: booking.booking_date.to_string().as_str(),
                time: time_slot.as_str(),
                amount: booking.turf_price.to_string().as_str(),
                booking_id: booking_reference(booking.id.as_str()).as_str(),
            }),
        )
        .await
    {
        tracing::error!("Failed to send booking confirmation email: {:?}", err);
    }

    Ok(response::Success::BookingCreated(booking))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn today_and_future_dates_are_bookable() {
        let today = date("2026-08-07");
        assert!(is_bookable(today, today));
        assert!(is_bookable(date("2026-08-08"), today));
        assert!(is_bookable(date("2027-01-01"), today));
    }

    #[test]
    fn past_dates_are_not_bookable() {
        let today = date("2026-08-07");
        assert!(!is_bookable(date("2026-08-06"), today));
        assert!(!is_bookable(date("2020-01-01"), today));
    }

    #[test]
    fn derives_the_customer_name_from_the_email() {
        assert_eq!(customer_name("sam@example.com"), "sam");
        assert_eq!(customer_name("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn shortens_the_booking_id_for_the_reference() {
        assert_eq!(booking_reference("01hx3y5abcdef"), "01HX3Y5A");
    }
}
