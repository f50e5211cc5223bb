pub use crate::utils::database;
use crate::utils::{identity::IdentityVerifier, mail::Mailer, payment::PaymentProvider};
use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub identity: IdentityVerifier,
    pub mailer: Mailer,
    pub payment: PaymentProvider,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

#[derive(Clone)]
pub struct IdentityConfig {
    pub token_secret: Option<String>,
}

#[derive(Clone)]
pub struct MailConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub sender: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub key_id: Option<String>,
    pub key_secret: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub identity: IdentityConfig,
    pub mail: MailConfig,
    pub payment: PaymentConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let allowed_origins = env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        let identity_token_secret = env::var("IDENTITY_TOKEN_SECRET").ok();
        let mail_host = env::var("EMAIL_HOST").ok();
        let mail_port = env::var("EMAIL_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .expect("Invalid EMAIL_PORT number");
        let mail_user = env::var("EMAIL_USER").ok();
        let mail_password = env::var("EMAIL_PASS").ok();
        let mail_sender = env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "TurfNow <noreply@turfnow.com>".to_string());
        let payment_api_endpoint = env::var("RAZORPAY_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api.razorpay.com/v1".to_string());
        let payment_key_id = env::var("RAZORPAY_KEY_ID").ok();
        let payment_key_secret = env::var("RAZORPAY_KEY_SECRET").ok();

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                allowed_origins,
            },
            identity: IdentityConfig {
                token_secret: identity_token_secret,
            },
            mail: MailConfig {
                host: mail_host,
                port: mail_port,
                user: mail_user,
                password: mail_password,
                sender: mail_sender,
            },
            payment: PaymentConfig {
                api_endpoint: payment_api_endpoint,
                key_id: payment_key_id,
                key_secret: payment_key_secret,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        let identity = match self.identity.token_secret {
            Some(secret) => IdentityVerifier::from_secret(secret.as_str()),
            None => {
                if self.app.environment.is_production() {
                    panic!("IDENTITY_TOKEN_SECRET is required in production");
                }
                tracing::warn!(
                    "Identity provider not configured, bearer tokens resolve to a stub identity"
                );
                IdentityVerifier::Unconfigured
            }
        };

        let mailer = match (self.mail.host, self.mail.user, self.mail.password) {
            (Some(host), Some(user), Some(password)) => Mailer::smtp(
                host.as_str(),
                self.mail.port,
                user,
                password,
                self.mail.sender,
            ),
            _ => {
                tracing::warn!("Email service not configured, emails are logged to the console");
                Mailer::Console {
                    sender: self.mail.sender,
                }
            }
        };

        let payment = match (self.payment.key_id, self.payment.key_secret) {
            (Some(key_id), Some(key_secret)) => {
                PaymentProvider::razorpay(key_id, key_secret, self.payment.api_endpoint)
            }
            _ => {
                tracing::warn!("Payment provider not configured, online payments are disabled");
                PaymentProvider::Disabled
            }
        };

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                allowed_origins: self.app.allowed_origins,
            },
            db_conn,
            identity,
            mailer,
            payment,
        }
    }
}
