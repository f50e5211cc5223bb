pub mod response {
    use crate::modules::turf::repository::Turf;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Turfs(Vec<Turf>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Turfs(turfs) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": turfs })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ProfileNotFound,
        NotApproved,
        FailedToFetchTurfs,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Owner profile not found" })),
                )
                    .into_response(),
                Self::NotApproved => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "success": false,
                        "error": "Your owner account is not approved yet",
                    })),
                )
                    .into_response(),
                Self::FailedToFetchTurfs => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch turfs" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
