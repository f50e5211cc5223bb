use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an identity-provider bearer token. `admin` and `owner`
/// are custom claims; absent claims default to false.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IdentityClaims {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub owner: bool,
    pub exp: usize,
}

pub enum Error {
    InvalidToken,
}

#[derive(Clone)]
pub struct SecretVerifier {
    decoding_key: DecodingKey,
}

/// Token verification backend, selected once at startup. `Unconfigured` is
/// the development fallback used when no identity secret is present: any
/// bearer token resolves to a stub identity with no custom claims.
#[derive(Clone)]
pub enum IdentityVerifier {
    Secret(SecretVerifier),
    Unconfigured,
}

impl IdentityVerifier {
    pub fn from_secret(secret: &str) -> Self {
        Self::Secret(SecretVerifier {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, Error> {
        match self {
            Self::Secret(verifier) => decode::<IdentityClaims>(
                token,
                &verifier.decoding_key,
                &Validation::new(Algorithm::HS256),
            )
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::warn!("Failed to verify identity token: {}", err);
                Error::InvalidToken
            }),
            Self::Unconfigured => {
                tracing::debug!("Identity provider not configured, issuing stub identity");
                Ok(IdentityClaims {
                    sub: String::from("dev-user"),
                    email: String::from("dev@turfnow.local"),
                    admin: false,
                    owner: false,
                    exp: 0,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, claims: &IdentityClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims() -> IdentityClaims {
        IdentityClaims {
            sub: String::from("user-1"),
            email: String::from("user@example.com"),
            admin: true,
            owner: false,
            exp: 4102444800, // far future
        }
    }

    #[test]
    fn accepts_a_token_signed_with_the_shared_secret() {
        let verifier = IdentityVerifier::from_secret("s3cret");
        let verified = verifier.verify(&token("s3cret", &claims()));

        let verified = match verified {
            Ok(claims) => claims,
            Err(_) => panic!("expected the token to verify"),
        };
        assert_eq!(verified.sub, "user-1");
        assert!(verified.admin);
        assert!(!verified.owner);
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let verifier = IdentityVerifier::from_secret("s3cret");
        assert!(verifier.verify(&token("other", &claims())).is_err());
    }

    #[test]
    fn rejects_an_expired_token() {
        let verifier = IdentityVerifier::from_secret("s3cret");
        let mut expired = claims();
        expired.exp = 1000;
        assert!(verifier.verify(&token("s3cret", &expired)).is_err());
    }

    #[test]
    fn unconfigured_verifier_issues_a_stub_identity() {
        let verifier = IdentityVerifier::Unconfigured;
        let verified = match verifier.verify("anything") {
            Ok(claims) => claims,
            Err(_) => panic!("expected the stub identity"),
        };
        assert_eq!(verified.sub, "dev-user");
        assert!(!verified.admin);
    }
}
