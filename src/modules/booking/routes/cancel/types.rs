pub mod request {
    pub struct Payload {
        pub booking_id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BookingCancelled,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookingCancelled => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Booking cancelled successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        BookingNotFound,
        AccessDenied,
        AlreadyCancelled,
        FailedToCancelBooking,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookingNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Booking not found" })),
                )
                    .into_response(),
                Self::AccessDenied => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Access denied" })),
                )
                    .into_response(),
                Self::AlreadyCancelled => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Booking is already cancelled" })),
                )
                    .into_response(),
                Self::FailedToCancelBooking => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to cancel booking" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
