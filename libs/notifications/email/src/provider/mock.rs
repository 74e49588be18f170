//! Mock email provider for testing

use super::{EmailProvider, SendResult};
use crate::models::Email;
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock email provider that captures sent emails.
///
/// Clones share the same outbox, so a test can keep one handle while the
/// service under test owns another.
#[derive(Clone, Default)]
pub struct MockEmailProvider {
    sent_emails: Arc<Mutex<Vec<Email>>>,
    failure_message: Option<String>,
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure_message: Some(message.into()),
        }
    }

    pub async fn sent_emails(&self) -> Vec<Email> {
        self.sent_emails.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent_emails.lock().await.len()
    }

    /// Check if an email was sent to a specific address
    pub async fn was_sent_to(&self, address: &str) -> bool {
        self.sent_emails
            .lock()
            .await
            .iter()
            .any(|e| e.to == address)
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &Email) -> Result<SendResult> {
        if let Some(message) = &self.failure_message {
            return Err(eyre::eyre!(message.clone()));
        }

        self.sent_emails.lock().await.push(email.clone());

        Ok(SendResult {
            message_id: format!("mock-{}", email.id),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_captures_email() {
        let provider = MockEmailProvider::new();
        let handle = provider.clone();

        let email = Email::new("shop@example.com", "New Enquiry Received").with_text("Body");
        let result = provider.send(&email).await.unwrap();

        assert_eq!(result.message_id, format!("mock-{}", email.id));
        assert_eq!(handle.sent_count().await, 1);
        assert!(handle.was_sent_to("shop@example.com").await);
        assert!(!handle.was_sent_to("other@example.com").await);
    }

    #[tokio::test]
    async fn test_failing_mock_records_nothing() {
        let provider = MockEmailProvider::failing("relay down");

        let email = Email::new("shop@example.com", "Subject").with_text("Body");
        let err = provider.send(&email).await.unwrap_err();

        assert!(err.to_string().contains("relay down"));
        assert!(provider.sent_emails().await.is_empty());
    }
}
