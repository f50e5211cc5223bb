use super::types::{request, response};
use crate::types::Context;
use crate::utils::payment::PaymentProvider;
use std::sync::Arc;

/// Converts a major-unit amount to the currency's minor unit. None for
/// missing, non-positive, or non-finite amounts.
fn to_minor_units(amount: Option<f64>) -> Option<u64> {
    let amount = amount?;
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as u64)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let client = match &ctx.payment {
        PaymentProvider::Razorpay(client) => client,
        PaymentProvider::Disabled => return Err(response::Error::PaymentsUnavailable),
    };

    let amount_minor = to_minor_units(payload.amount).ok_or(response::Error::InvalidAmount)?;
    let currency = payload.currency.unwrap_or_else(|| String::from("INR"));
    let receipt = payload.receipt.unwrap_or_else(|| {
        format!("receipt_{}", chrono::Utc::now().timestamp_millis())
    });

    client
        .create_order(amount_minor, currency.as_str(), receipt.as_str())
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)
        .map(response::Success::OrderCreated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rupees_to_paise() {
        assert_eq!(to_minor_units(Some(499.0)), Some(49900));
        assert_eq!(to_minor_units(Some(10.55)), Some(1055));
    }

    #[test]
    fn rejects_missing_or_non_positive_amounts() {
        assert_eq!(to_minor_units(None), None);
        assert_eq!(to_minor_units(Some(0.0)), None);
        assert_eq!(to_minor_units(Some(-5.0)), None);
        assert_eq!(to_minor_units(Some(f64::NAN)), None);
    }
}
