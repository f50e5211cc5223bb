pub mod request {
    use serde::Deserialize;

    /// Snapshot of the turf being booked, as sent by the client.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TurfSnapshot {
        pub name: Option<String>,
        #[serde(default)]
        pub image: String,
        #[serde(default)]
        pub address: String,
        pub price_per_hour: Option<f64>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub booking: Option<TurfSnapshot>,
        pub time: Option<String>,
        pub booking_date: Option<String>,
        pub sport: Option<String>,
    }
}

pub mod response {
    use crate::modules::booking::repository::{allowed_time_slots_label, Booking};
    use crate::modules::turf::repository::allowed_sports_label;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BookingCreated(Booking),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookingCreated(booking) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Booking created successfully",
                        "data": booking,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingFields,
        MissingTurfName,
        InvalidSport,
        InvalidTimeSlot,
        DateInThePast,
        SlotAlreadyBooked,
        FailedToCreateBooking,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Missing required fields: booking, time, bookingDate, sport",
                    })),
                )
                    .into_response(),
                Self::MissingTurfName => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Invalid booking data: turf name is required",
                    })),
                )
                    .into_response(),
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!("Invalid sport. Allowed: {}", allowed_sports_label()),
                    })),
                )
                    .into_response(),
                Self::InvalidTimeSlot => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!(
                            "Invalid time slot. Allowed: {}",
                            allowed_time_slots_label()
                        ),
                    })),
                )
                    .into_response(),
                Self::DateInThePast => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Booking date must be today or in the future",
                    })),
                )
                    .into_response(),
                Self::SlotAlreadyBooked => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "This slot is already booked" })),
                )
                    .into_response(),
                Self::FailedToCreateBooking => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to create booking" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
