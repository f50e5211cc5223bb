pub mod request {
    pub struct Payload {
        pub sport: String,
        pub id: String,
    }
}

pub mod response {
    use crate::modules::turf::repository::Turf;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Turf(Turf),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Turf(turf) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": turf })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidSport,
        TurfNotFound,
        FailedToFetchTurf,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid sport" })),
                )
                    .into_response(),
                Self::TurfNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Turf not found" })),
                )
                    .into_response(),
                Self::FailedToFetchTurf => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch turf" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
