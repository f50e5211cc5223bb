pub mod templates;

use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug)]
pub enum Error {
    InvalidAddress,
    NotSent,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

/// Outbound mail backend, selected once at startup. `Console` is the
/// unconfigured fallback: messages are logged instead of delivered so the
/// calling operation still succeeds.
#[derive(Clone)]
pub enum Mailer {
    Smtp(SmtpMailer),
    Console { sender: String },
}

impl Mailer {
    pub fn smtp(host: &str, port: u16, user: String, password: String, sender: String) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .unwrap_or_else(|err| {
                tracing::error!("{}", err);
                panic!("Invalid SMTP relay host {}", host)
            })
            .port(port)
            .credentials(Credentials::new(user, password))
            .build();

        Self::Smtp(SmtpMailer { transport, sender })
    }

    pub async fn send(&self, to: &str, subject: &str, html: String) -> Result<()> {
        match self {
            Self::Smtp(mailer) => {
                let email = Message::builder()
                    .from(
                        mailer
                            .sender
                            .parse()
                            .map_err(|_| Error::InvalidAddress)?,
                    )
                    .to(to.parse().map_err(|_| Error::InvalidAddress)?)
                    .subject(subject)
                    .header(ContentType::TEXT_HTML)
                    .body(html)
                    .map_err(|err| {
                        tracing::error!("Failed to build email: {}", err);
                        Error::NotSent
                    })?;

                match mailer.transport.send(email).await {
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!("Failed to send email to {}: {}", to, err);
                        Err(Error::NotSent)
                    }
                }
            }
            Self::Console { sender } => {
                tracing::info!(
                    "[email preview, not sent] from={} to={} subject={} body={}",
                    sender,
                    to,
                    subject,
                    html.chars().take(200).collect::<String>()
                );
                Ok(())
            }
        }
    }
}
