pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub reason: Option<String>,
    }

    pub struct Payload {
        pub owner_id: String,
        pub reason: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OwnerRejected,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OwnerRejected => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Owner rejected" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OwnerNotFound,
        FailedToRejectOwner,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OwnerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Owner not found" })),
                )
                    .into_response(),
                Self::FailedToRejectOwner => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to reject owner" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
