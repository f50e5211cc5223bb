pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub full_name: Option<String>,
        pub phone: Option<String>,
        pub business_name: Option<String>,
        pub business_address: Option<String>,
        pub city: Option<String>,
        pub description: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ProfileUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileUpdated => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "message": "Profile updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ProfileNotFound,
        FailedToUpdateProfile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Owner profile not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to update profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
