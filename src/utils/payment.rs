use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

pub enum Error {
    UnexpectedError,
}

#[derive(Deserialize)]
struct ProviderOrder {
    id: String,
    amount: u64,
    currency: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
}

#[derive(Clone)]
pub struct RazorpayClient {
    key_id: String,
    key_secret: String,
    api_endpoint: String,
}

/// Online payment backend, selected once at startup. `Disabled` keeps the
/// API up with pay-at-venue as the only completion mode.
#[derive(Clone)]
pub enum PaymentProvider {
    Razorpay(RazorpayClient),
    Disabled,
}

impl PaymentProvider {
    pub fn razorpay(key_id: String, key_secret: String, api_endpoint: String) -> Self {
        Self::Razorpay(RazorpayClient {
            key_id,
            key_secret,
            api_endpoint,
        })
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Razorpay(_))
    }
}

impl RazorpayClient {
    /// Creates a provider order. `amount_minor` is in the currency's minor
    /// unit (paise for INR).
    pub async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<OrderDetails, Error> {
        let res = reqwest::Client::new()
            .post(format!("{}/orders", self.api_endpoint))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&json!({
                "amount": amount_minor,
                "currency": currency,
                "receipt": receipt,
            }))
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach payment provider: {}", err);
                Error::UnexpectedError
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            tracing::error!("Payment provider rejected order ({}): {}", status, body);
            return Err(Error::UnexpectedError);
        }

        let order = res.json::<ProviderOrder>().await.map_err(|err| {
            tracing::error!("Failed to parse payment provider response: {}", err);
            Error::UnexpectedError
        })?;

        Ok(OrderDetails {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: self.key_id.clone(),
        })
    }

    pub fn signature_matches(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        signature_matches(&self.key_secret, order_id, payment_id, signature)
    }
}

/// Checks the provider's HMAC-SHA256 signature over `order_id|payment_id`.
pub fn signature_matches(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let mut mac = match Hmac::<Sha256>::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    let decoded = match hex::decode(signature) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!("Payment signature is not valid hex: {}", err);
            return false;
        }
    };

    mac.verify_slice(&decoded).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_a_correctly_signed_payment() {
        let signature = sign("secret", "order_1", "pay_1");
        assert!(signature_matches("secret", "order_1", "pay_1", &signature));
    }

    #[test]
    fn rejects_a_tampered_payment_id() {
        let signature = sign("secret", "order_1", "pay_1");
        assert!(!signature_matches("secret", "order_1", "pay_2", &signature));
    }

    #[test]
    fn rejects_a_signature_from_another_secret() {
        let signature = sign("other", "order_1", "pay_1");
        assert!(!signature_matches("secret", "order_1", "pay_1", &signature));
    }

    #[test]
    fn rejects_non_hex_signatures() {
        assert!(!signature_matches("secret", "order_1", "pay_1", "not-hex"));
    }
}
