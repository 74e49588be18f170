//! Twilio SMS provider
//!
//! Sends messages through the Twilio REST API (`Messages.json`) using a
//! form-encoded POST authenticated with the account SID and auth token.

use super::{SendResult, SmsProvider};
use crate::models::Sms;
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use eyre::{eyre, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error};

/// Default Twilio REST API base URL
pub const TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Twilio gateway configuration
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number messages originate from
    pub from_number: String,
    pub api_base: String,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl FromEnv for TwilioConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account_sid: env_required("TWILIO_ACCOUNT_SID")?,
            auth_token: env_required("TWILIO_AUTH_TOKEN")?,
            from_number: env_required("TWILIO_PHONE_NUMBER")?,
            api_base: env_or_default("TWILIO_API_BASE", TWILIO_API_BASE),
        })
    }
}

/// Successful `Messages.json` response; only the message SID is used
#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Twilio error body
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

/// Twilio SMS provider
pub struct TwilioProvider {
    config: TwilioConfig,
    client: Client,
}

impl TwilioProvider {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsProvider for TwilioProvider {
    async fn send(&self, sms: &Sms) -> Result<SendResult> {
        debug!(to = %sms.to, "Sending SMS via Twilio");

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", sms.to.as_str()),
                ("From", self.config.from_number.as_str()),
                ("Body", sms.body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| eyre!("Twilio request failed: {}", e))?;

        let status = response.status();

        if status.is_success() {
            let body: MessageResponse = response
                .json()
                .await
                .map_err(|e| eyre!("Invalid Twilio response: {}", e))?;

            debug!(message_id = %body.sid, "SMS sent successfully");
            return Ok(SendResult {
                message_id: body.sid,
            });
        }

        let raw = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(err) => {
                error!(status = %status, code = ?err.code, error = %err.message, "Twilio API error");
                Err(eyre!(err.message))
            }
            Err(_) => {
                error!(status = %status, error = %raw, "Twilio API error");
                Err(eyre!("Twilio error ({}): {}", status, raw))
            }
        }
    }

    fn name(&self) -> &'static str {
        "twilio"
    }
}
