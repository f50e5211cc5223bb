use super::types::{request, response};
use crate::types::Context;
use crate::utils::payment::PaymentProvider;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let client = match &ctx.payment {
        PaymentProvider::Razorpay(client) => client,
        PaymentProvider::Disabled => return Err(response::Error::PaymentsUnavailable),
    };

    if !client.signature_matches(
        payload.order_id.as_str(),
        payload.payment_id.as_str(),
        payload.signature.as_str(),
    ) {
        return Err(response::Error::InvalidSignature);
    }

    Ok(response::Success::PaymentVerified {
        payment_id: payload.payment_id,
    })
}
