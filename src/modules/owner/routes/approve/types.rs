pub mod request {
    pub struct Payload {
        pub owner_id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OwnerApproved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OwnerApproved => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Owner approved successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OwnerNotFound,
        FailedToApproveOwner,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OwnerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Owner not found" })),
                )
                    .into_response(),
                Self::FailedToApproveOwner => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to approve owner" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
