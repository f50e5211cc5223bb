pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: Option<String>,
    }

    pub struct Payload {
        pub booking_id: String,
        pub status: Option<String>,
    }
}

pub mod response {
    use crate::modules::booking::repository::{allowed_statuses_label, BookingStatus};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BookingUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookingUpdated => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Booking updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidStatus,
        InvalidTransition(BookingStatus, BookingStatus),
        BookingNotFound,
        AccessDenied,
        FailedToUpdateBooking,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidStatus => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!("Invalid status. Allowed: {}", allowed_statuses_label()),
                    })),
                )
                    .into_response(),
                Self::InvalidTransition(from, to) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!(
                            "Invalid status transition from {} to {}",
                            from.to_string(),
                            to.to_string()
                        ),
                    })),
                )
                    .into_response(),
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
                Self::FailedToUpdateBooking => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to update booking" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
