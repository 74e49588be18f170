//! Order confirmation SMS.

use sms::{Sms, SmsProvider};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{NotificationError, NotificationResult};

pub const ORDER_CONFIRMATION: &str =
    "Order successfully placed! Thank you for shopping with Medikart. Your order is being processed.";

pub struct OrderService<S: SmsProvider> {
    provider: Arc<S>,
    country_code: String,
}

impl<S: SmsProvider> OrderService<S> {
    pub fn new(provider: S, country_code: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(provider),
            country_code: country_code.into(),
        }
    }

    /// Text the order confirmation to `phone_number`.
    ///
    /// The order itself is not persisted; a gateway failure only means the
    /// customer was not notified.
    #[instrument(skip(self, phone_number), fields(provider = self.provider.name()))]
    pub async fn notify_order_placed(&self, phone_number: &str) -> NotificationResult<()> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(NotificationError::Validation(
                "phoneNumber is required.".to_string(),
            ));
        }

        let to = normalize_phone_number(&self.country_code, phone_number);
        let result = self
            .provider
            .send(&Sms::new(to, ORDER_CONFIRMATION))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to send order SMS");
                NotificationError::SmsDelivery(e.to_string())
            })?;

        tracing::info!(message_id = %result.message_id, "Order SMS sent");
        Ok(())
    }
}

impl<S: SmsProvider> Clone for OrderService<S> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            country_code: self.country_code.clone(),
        }
    }
}

/// Prefix `country_code` unless the number already starts with it.
/// No further validation; the gateway rejects malformed numbers.
pub fn normalize_phone_number(country_code: &str, phone_number: &str) -> String {
    if phone_number.starts_with(country_code) {
        phone_number.to_string()
    } else {
        format!("{}{}", country_code, phone_number)
    }
}
