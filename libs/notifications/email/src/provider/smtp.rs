//! SMTP email provider using lettre

use super::{EmailProvider, SendResult};
use crate::models::Email;
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, env_required};
use eyre::{Result, WrapErr};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::fmt;
use std::sync::Arc;

/// Port that speaks TLS from the first byte; every other port upgrades with STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP relay configuration
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
    pub use_tls: bool,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

impl FromEnv for SmtpConfig {
    /// `EMAIL_USER` is both the relay login and the sender address.
    fn from_env() -> Result<Self, ConfigError> {
        let username = env_required("EMAIL_USER")?;
        let password = env_required("EMAIL_PASS")?;

        let use_tls = match env_or_default("SMTP_USE_TLS", "true").to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => {
                return Err(ConfigError::ParseError {
                    key: "SMTP_USE_TLS".to_string(),
                    details: format!("expected a boolean, got '{}'", other),
                });
            }
        };

        Ok(Self {
            host: env_or_default("SMTP_HOST", "smtp.gmail.com"),
            port: env_parse_or("SMTP_PORT", 587)?,
            from_email: username.clone(),
            username,
            password,
            from_name: env_or_default("EMAIL_FROM_NAME", "Medikart"),
            use_tls,
        })
    }
}

/// SMTP email provider
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: Arc<SmtpConfig>,
}

impl SmtpProvider {
    /// Create a new SMTP provider
    pub fn new(config: SmtpConfig) -> Result<Self> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let transport = if config.use_tls {
            let builder = if config.port == IMPLICIT_TLS_PORT {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            };
            builder
                .wrap_err("Failed to create SMTP relay")?
                .credentials(creds)
                .port(config.port)
                .build()
        } else if !config.username.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .credentials(creds)
                .port(config.port)
                .build()
        } else {
            // No auth (for Mailpit/Mailhog)
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        };

        tracing::debug!(host = %config.host, port = config.port, tls = config.use_tls, "SMTP provider configured");

        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    /// The address emails are sent from
    pub fn from_email(&self) -> &str {
        &self.config.from_email
    }

    fn build_message(&self, email: &Email) -> Result<Message> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .wrap_err("Invalid from address")?;

        let to: Mailbox = email.to.parse().wrap_err("Invalid to address")?;

        let mut builder = Message::builder().from(from).to(to).subject(&email.subject);

        if let Some(reply_to) = &email.reply_to {
            let reply_to_mailbox: Mailbox =
                reply_to.parse().wrap_err("Invalid reply-to address")?;
            builder = builder.reply_to(reply_to_mailbox);
        }

        let text = email
            .body_text
            .as_ref()
            .ok_or_else(|| eyre::eyre!("Email must have a text body"))?;

        builder
            .header(ContentType::TEXT_PLAIN)
            .body(text.clone())
            .wrap_err("Failed to build text message")
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .wrap_err("Failed to send email via SMTP")?;

        let message_id = response
            .message()
            .next()
            .map(|s| s.to_string())
            .unwrap_or_else(|| email.id.clone());

        tracing::info!(
            email_id = %email.id,
            to = %email.to,
            subject = %email.subject,
            "Email sent successfully"
        );

        Ok(SendResult { message_id })
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
