pub mod response {
    use crate::modules::owner::repository::Owner;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Profile(Owner),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Profile(owner) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": owner })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ProfileNotFound,
        FailedToFetchProfile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Owner profile not found" })),
                )
                    .into_response(),
                Self::FailedToFetchProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
