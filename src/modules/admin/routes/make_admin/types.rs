pub mod request {
    pub struct Payload {
        pub user_id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdminGranted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminGranted => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "User is now an admin" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        FailedToUpdateAdminStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateAdminStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to update admin status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
