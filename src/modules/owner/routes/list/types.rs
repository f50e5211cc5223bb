pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub status: Option<String>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::owner::repository::Owner;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Owners(Vec<Owner>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Owners(owners) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": owners })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOwners,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOwners => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to fetch owners" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
