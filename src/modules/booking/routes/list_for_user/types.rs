pub mod request {
    pub struct Payload {
        pub user_id: String,
    }
}

pub mod response {
    use crate::modules::booking::repository::Booking;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Bookings(Vec<Booking>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Bookings(bookings) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": bookings })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        AccessDenied,
        FailedToFetchBookings,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccessDenied => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Access denied" })),
                )
                    .into_response(),
                Self::FailedToFetchBookings => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch bookings" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
