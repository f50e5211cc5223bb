pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Stats {
        pub total_turfs: i64,
        pub total_bookings: i64,
        pub total_users: i64,
        pub total_revenue: BigDecimal,
        pub sport_wise: BTreeMap<String, i64>,
    }

    pub enum Success {
        Stats(Stats),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stats(stats) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": stats })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchStats,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchStats => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch stats" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
