pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ReviewDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewDeleted => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Review deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ReviewNotFound,
        AccessDenied,
        FailedToDeleteReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Review not found" })),
                )
                    .into_response(),
                Self::AccessDenied => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "success": false, "error": "Access denied" })),
                )
                    .into_response(),
                Self::FailedToDeleteReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to delete review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
