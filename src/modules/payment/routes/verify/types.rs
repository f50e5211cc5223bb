pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[serde(default)]
        pub order_id: String,
        #[serde(default)]
        pub payment_id: String,
        #[serde(default)]
        pub signature: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PaymentVerified { payment_id: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentVerified { payment_id } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Payment verified successfully",
                        "paymentId": payment_id,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        PaymentsUnavailable,
        InvalidSignature,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentsUnavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "success": false,
                        "error": "Online payments are currently unavailable. Please use pay-at-venue option.",
                    })),
                )
                    .into_response(),
                Self::InvalidSignature => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid payment signature" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
