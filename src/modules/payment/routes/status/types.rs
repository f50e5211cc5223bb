pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Status { razorpay: bool },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Status { razorpay } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": { "razorpay": razorpay, "cashAtVenue": true },
                    })),
                )
                    .into_response(),
            }
        }
    }
}
