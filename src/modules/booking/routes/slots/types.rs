pub mod request {
    pub struct Payload {
        pub turf_name: String,
        pub date: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BookedSlots(Vec<String>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookedSlots(slots) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": slots })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidDate,
        FailedToFetchSlots,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidDate => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid date format" })),
                )
                    .into_response(),
                Self::FailedToFetchSlots => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch booked slots" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
