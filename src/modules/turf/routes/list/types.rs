pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct Filters {
        pub city: Option<String>,
        pub available: Option<String>,
        pub min_price: Option<String>,
        pub max_price: Option<String>,
    }

    pub struct Payload {
        pub sport: String,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::turf::repository::{allowed_sports_label, Turf};
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
        InvalidSport,
        FailedToFetchTurfs,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidSport => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": format!("Invalid sport. Allowed: {}", allowed_sports_label()),
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
