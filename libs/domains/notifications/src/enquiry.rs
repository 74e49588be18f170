//! Contact form enquiries, delivered to the shop owner by email.

use email::{Email, EmailProvider};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{NotificationError, NotificationResult};
use crate::models::Enquiry;

pub const ENQUIRY_SUBJECT: &str = "New Enquiry Received";
pub const FIELDS_REQUIRED: &str = "All fields are required.";

pub struct EnquiryService<P: EmailProvider> {
    provider: Arc<P>,
    recipient: String,
}

impl<P: EmailProvider> EnquiryService<P> {
    pub fn new(provider: P, recipient: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(provider),
            recipient: recipient.into(),
        }
    }

    /// Email the enquiry to the configured recipient. Blank fields are
    /// rejected before anything is sent.
    #[instrument(skip(self, enquiry), fields(provider = self.provider.name()))]
    pub async fn submit(&self, enquiry: Enquiry) -> NotificationResult<()> {
        if !enquiry.is_complete() {
            return Err(NotificationError::Validation(FIELDS_REQUIRED.to_string()));
        }

        let email = compose(&self.recipient, &enquiry);

        let result = self.provider.send(&email).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to send enquiry email");
            NotificationError::EmailDelivery(e.to_string())
        })?;

        tracing::info!(message_id = %result.message_id, "Enquiry email sent");
        Ok(())
    }
}

impl<P: EmailProvider> Clone for EnquiryService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            recipient: self.recipient.clone(),
        }
    }
}

fn compose(recipient: &str, enquiry: &Enquiry) -> Email {
    Email::new(recipient, ENQUIRY_SUBJECT).with_text(format!(
        "Name: {}\nPhone: {}\nQuery: {}",
        enquiry.name, enquiry.phone, enquiry.query
    ))
}
