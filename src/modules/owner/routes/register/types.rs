pub mod request {
    use regex::Regex;
    use serde::Deserialize;
    use std::sync::LazyLock;
    use validator::Validate;

    static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[\d\s+\-()]{7,15}$").expect("Invalid phone regex")
    });

    // Presence of the required fields is checked in the service so the
    // combined error message matches the API contract; the format rules
    // below only fire on provided values.
    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub full_name: Option<String>,
        #[validate(regex(path = *PHONE_RE, message = "Invalid phone number format"))]
        pub phone: Option<String>,
        pub business_name: Option<String>,
        pub business_address: Option<String>,
        pub city: Option<String>,
        #[serde(default)]
        pub sport_types: Vec<String>,
        #[serde(default)]
        pub description: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        RegistrationSubmitted { uid: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RegistrationSubmitted { uid } => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Registration submitted successfully. Pending admin approval.",
                        "data": { "uid": uid, "status": "pending" },
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingFields,
        FailedToValidate(ValidationErrors),
        AlreadyRegistered,
        FailedToRegister,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingFields => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "All required fields must be provided: fullName, phone, businessName, businessAddress, city",
                    })),
                )
                    .into_response(),
                Self::FailedToValidate(errors) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": validation::first_message(&errors),
                    })),
                )
                    .into_response(),
                Self::AlreadyRegistered => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "You have already registered as a turf owner",
                    })),
                )
                    .into_response(),
                Self::FailedToRegister => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to register" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
