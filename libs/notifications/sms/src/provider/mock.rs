//! Mock SMS provider for testing

use super::{SendResult, SmsProvider};
use crate::models::Sms;
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock SMS provider that captures sent messages. Clones share the outbox.
#[derive(Clone, Default)]
pub struct MockSmsProvider {
    sent: Arc<Mutex<Vec<Sms>>>,
    failure_message: Option<String>,
}

impl MockSmsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider that always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure_message: Some(message.into()),
        }
    }

    pub async fn sent_messages(&self) -> Vec<Sms> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send(&self, sms: &Sms) -> Result<SendResult> {
        if let Some(message) = &self.failure_message {
            return Err(eyre::eyre!(message.clone()));
        }

        self.sent.lock().await.push(sms.clone());

        Ok(SendResult {
            message_id: format!("mock-{}", sms.id),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
