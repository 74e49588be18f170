//! SMS provider implementations

pub mod mock;
pub mod twilio;

pub use mock::MockSmsProvider;
pub use twilio::{TwilioConfig, TwilioProvider};

use crate::models::Sms;
use async_trait::async_trait;
use eyre::Result;

/// Result of sending a message
#[derive(Debug)]
pub struct SendResult {
    /// Provider-specific message ID
    pub message_id: String,
}

/// Trait for SMS gateways
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send a message. The error text is the gateway's own reason.
    async fn send(&self, sms: &Sms) -> Result<SendResult>;

    /// Get provider name
    fn name(&self) -> &'static str;
}
