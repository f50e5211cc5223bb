pub mod request {
    pub struct Payload {
        pub sport: String,
        pub turf_id: String,
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reviews(Vec<Review>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reviews(reviews) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": reviews })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidSport,
        FailedToFetchReviews,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid sport" })),
                )
                    .into_response(),
                Self::FailedToFetchReviews => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch reviews" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
