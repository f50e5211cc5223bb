pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        pub name: Option<String>,
        pub address: Option<String>,
        pub city: Option<String>,
        #[serde(default)]
        pub image: String,
        pub price_per_hour: Option<f64>,
        #[serde(default)]
        pub facilities: Vec<String>,
        #[serde(default)]
        pub size: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub owner_id: String,
    }

    pub struct Payload {
        pub sport: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::turf::repository::Turf;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TurfCreated(Turf),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TurfCreated(turf) => (
                    StatusCode::CREATED,
                    Json(json!({ "success": true, "data": turf })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidSport,
        MissingFields,
        FailedToCreateTurf,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid sport" })),
                )
                    .into_response(),
                Self::MissingFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "name, address, city, and pricePerHour are required",
                    })),
                )
                    .into_response(),
                Self::FailedToCreateTurf => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to create turf" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
