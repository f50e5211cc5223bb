use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

use crate::modules::turf::repository::Sport;

pub const ALLOWED_TIME_SLOTS: [&str; 7] = [
    "5:00 AM", "7:00 AM", "9:00 AM", "4:00 PM", "6:00 PM", "8:00 PM", "10:00 PM",
];

pub fn is_allowed_time_slot(slot: &str) -> bool {
    ALLOWED_TIME_SLOTS.contains(&slot)
}

pub fn allowed_time_slots_label() -> String {
    ALLOWED_TIME_SLOTS.join(", ")
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    PendingCash,
    Cancelled,
    Completed,
}

impl ToString for BookingStatus {
    fn to_string(&self) -> String {
        match self {
            BookingStatus::Pending => String::from("pending"),
            BookingStatus::Confirmed => String::from("confirmed"),
            BookingStatus::PendingCash => String::from("pending_cash"),
            BookingStatus::Cancelled => String::from("cancelled"),
            BookingStatus::Completed => String::from("completed"),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "pending_cash" => Ok(BookingStatus::PendingCash),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(format!("'{}' is not a valid BookingStatus", s)),
        }
    }
}

impl BookingStatus {
    /// A non-cancelled booking keeps its slot occupied.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match self {
            BookingStatus::Pending => matches!(
                next,
                BookingStatus::Confirmed
                    | BookingStatus::PendingCash
                    | BookingStatus::Cancelled
                    | BookingStatus::Completed
            ),
            BookingStatus::PendingCash => matches!(
                next,
                BookingStatus::Confirmed | BookingStatus::Completed | BookingStatus::Cancelled
            ),
            BookingStatus::Confirmed => {
                matches!(next, BookingStatus::Completed | BookingStatus::Cancelled)
            }
            // Terminal states.
            BookingStatus::Cancelled | BookingStatus::Completed => false,
        }
    }
}

pub fn allowed_statuses_label() -> String {
    String::from("pending, confirmed, pending_cash, cancelled, completed")
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub turf_name: String,
    pub turf_image: String,
    pub turf_address: String,
    pub turf_price: BigDecimal,
    pub sport: String,
    #[serde(rename = "time")]
    pub time_slot: String,
    pub booking_date: NaiveDate,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub cancelled_at: Option<NaiveDateTime>,
}

pub struct CreateBookingPayload {
    pub user_id: String,
    pub email: String,
    pub turf_name: String,
    pub turf_image: String,
    pub turf_address: String,
    pub turf_price: BigDecimal,
    pub sport: Sport,
    pub time_slot: String,
    pub booking_date: NaiveDate,
}

pub enum Error {
    SlotTaken,
    UnexpectedError,
}

/// Inserts the booking, relying on the partial unique index over
/// (turf_name, booking_date, time_slot) for slot exclusivity: a concurrent
/// booking of the same slot surfaces as a unique violation, never as a
/// double booking.
pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateBookingPayload,
) -> Result<Booking, Error> {
    sqlx::query_as::<_, Booking>(
        "
        INSERT INTO bookings (
            id,
            user_id,
            email,
            turf_name,
            turf_image,
            turf_address,
            turf_price,
            sport,
            time_slot,
            booking_date,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.email)
    .bind(payload.turf_name)
    .bind(payload.turf_image)
    .bind(payload.turf_address)
    .bind(payload.turf_price)
    .bind(payload.sport.to_string())
    .bind(payload.time_slot)
    .bind(payload.booking_date)
    .bind(BookingStatus::Pending.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err)
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            Error::SlotTaken
        }
        err => {
            tracing::error!("Error occurred while trying to create a booking: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Booking>, Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch booking {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Booking>, Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch bookings for user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Booking>, Error> {
    sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch bookings: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_turf_names<'e, E: PgExecutor<'e>>(
    e: E,
    turf_names: Vec<String>,
) -> Result<Vec<Booking>, Error> {
    sqlx::query_as::<_, Booking>(
        "SELECT * FROM bookings WHERE turf_name = ANY($1) ORDER BY created_at DESC",
    )
    .bind(turf_names)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch bookings by turf names: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_booked_slots<'e, E: PgExecutor<'e>>(
    e: E,
    turf_name: String,
    date: NaiveDate,
) -> Result<Vec<String>, Error> {
    sqlx::query_scalar::<_, String>(
        "
        SELECT time_slot FROM bookings
        WHERE turf_name = $1 AND booking_date = $2 AND status <> 'cancelled'
        ",
    )
    .bind(turf_name.clone())
    .bind(date)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch booked slots for {}: {}",
            turf_name,
            err
        );
        Error::UnexpectedError
    })
}

/// Moves a booking between statuses. The current status is part of the
/// predicate, so a concurrent transition loses cleanly instead of
/// overwriting.
pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    from: BookingStatus,
    to: BookingStatus,
) -> Result<bool, Error> {
    sqlx::query(
        "
        UPDATE bookings
        SET status = $3,
            updated_at = NOW(),
            cancelled_at = CASE WHEN $3 = 'cancelled' THEN NOW() ELSE cancelled_at END
        WHERE id = $1 AND status = $2
        ",
    )
    .bind(id.clone())
    .bind(from.to_string())
    .bind(to.to_string())
    .execute(e)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update status for booking {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn cancel_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool, Error> {
    sqlx::query(
        "
        UPDATE bookings
        SET status = 'cancelled', cancelled_at = NOW(), updated_at = NOW()
        WHERE id = $1 AND status <> 'cancelled'
        ",
    )
    .bind(id.clone())
    .execute(e)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to cancel booking {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count bookings: {}", err);
            Error::UnexpectedError
        })
}

/// Revenue over bookings that have been paid or will be paid at the venue.
pub async fn total_revenue<'e, E: PgExecutor<'e>>(e: E) -> Result<BigDecimal, Error> {
    sqlx::query_scalar::<_, BigDecimal>(
        "
        SELECT COALESCE(SUM(turf_price), 0) FROM bookings
        WHERE status IN ('confirmed', 'completed')
        ",
    )
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to compute revenue: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_move_to_every_other_status() {
        let pending = BookingStatus::Pending;
        assert!(pending.can_transition_to(BookingStatus::Confirmed));
        assert!(pending.can_transition_to(BookingStatus::PendingCash));
        assert!(pending.can_transition_to(BookingStatus::Cancelled));
        assert!(pending.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn cancelled_and_completed_are_terminal() {
        for terminal in [BookingStatus::Cancelled, BookingStatus::Completed] {
            for next in [
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::PendingCash,
                BookingStatus::Cancelled,
                BookingStatus::Completed,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn confirmed_can_only_complete_or_cancel() {
        let confirmed = BookingStatus::Confirmed;
        assert!(confirmed.can_transition_to(BookingStatus::Completed));
        assert!(confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(!confirmed.can_transition_to(BookingStatus::Pending));
        assert!(!confirmed.can_transition_to(BookingStatus::PendingCash));
    }

    #[test]
    fn pending_cash_can_confirm_once_paid() {
        assert!(BookingStatus::PendingCash.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn every_status_except_cancelled_occupies_its_slot() {
        assert!(BookingStatus::Pending.occupies_slot());
        assert!(BookingStatus::Confirmed.occupies_slot());
        assert!(BookingStatus::PendingCash.occupies_slot());
        assert!(BookingStatus::Completed.occupies_slot());
        assert!(!BookingStatus::Cancelled.occupies_slot());
    }

    #[test]
    fn statuses_round_trip_through_their_labels() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::PendingCash,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            let label = status.to_string();
            let parsed = match label.parse::<BookingStatus>() {
                Ok(parsed) => parsed,
                Err(_) => panic!("expected '{}' to parse", label),
            };
            assert_eq!(parsed, status);
        }
        assert!("paid".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn knows_the_allowed_time_slots() {
        assert!(is_allowed_time_slot("5:00 AM"));
        assert!(is_allowed_time_slot("10:00 PM"));
        assert!(!is_allowed_time_slot("11:00 PM"));
        assert!(!is_allowed_time_slot("5:00am"));
    }
}
