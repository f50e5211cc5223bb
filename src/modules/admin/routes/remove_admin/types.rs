pub mod request {
    pub struct Payload {
        pub user_id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdminRevoked,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminRevoked => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Admin privileges removed" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        FailedToRemoveAdmin,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToRemoveAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to remove admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
