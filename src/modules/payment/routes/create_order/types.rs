pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub amount: Option<f64>,
        pub currency: Option<String>,
        pub receipt: Option<String>,
    }
}

pub mod response {
    use crate::utils::payment::OrderDetails;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(OrderDetails),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "data": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        PaymentsUnavailable,
        InvalidAmount,
        FailedToCreateOrder,
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
                Self::InvalidAmount => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid amount" })),
                )
                    .into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": "Failed to create payment order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
