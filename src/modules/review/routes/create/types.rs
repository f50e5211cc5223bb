pub mod request {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub sport: Option<String>,
        pub turf_id: Option<String>,
        // Left as raw JSON so numeric strings coerce like the SPA expects.
        pub rating: Option<Value>,
        pub comment: Option<String>,
    }
}

pub mod response {
    use crate::modules::review::repository::Review;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReviewCreated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewCreated(review) => (
                    StatusCode::CREATED,
                    Json(json!({ "success": true, "data": review })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingFields,
        InvalidSport,
        InvalidRating,
        FailedToCreateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "sport, turfId, rating, and comment are required",
                    })),
                )
                    .into_response(),
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid sport" })),
                )
                    .into_response(),
                Self::InvalidRating => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Rating must be an integer between 1 and 5",
                    })),
                )
                    .into_response(),
                Self::FailedToCreateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to create review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
