pub mod request {
    use serde::Deserialize;

    // Mirrors the update allow-list; anything else in the body is ignored.
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub name: Option<String>,
        pub address: Option<String>,
        pub city: Option<String>,
        pub image: Option<String>,
        pub price_per_hour: Option<f64>,
        pub facilities: Option<Vec<String>>,
        pub size: Option<String>,
        pub description: Option<String>,
        pub available: Option<bool>,
        pub owner_id: Option<String>,
    }

    pub struct Payload {
        pub sport: String,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::turf::repository::Turf;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TurfUpdated(Turf),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TurfUpdated(turf) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Turf updated successfully",
                        "data": turf,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidSport,
        InvalidPrice,
        TurfNotFound,
        FailedToUpdateTurf,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid sport" })),
                )
                    .into_response(),
                Self::InvalidPrice => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid pricePerHour" })),
                )
                    .into_response(),
                Self::TurfNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Turf not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateTurf => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to update turf" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
