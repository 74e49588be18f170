//! Error types for the notifications domain.

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message shown when the enquiry email cannot be delivered
pub const ENQUIRY_FAILED: &str = "Failed to send enquiry. Try again later.";

pub type NotificationResult<T> = Result<T, NotificationError>;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("{0}")]
    Validation(String),

    /// The email relay rejected or never received the enquiry.
    /// The reason is logged, not shown to the client.
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    /// The SMS gateway refused the message; the reason is shown to the client
    #[error("SMS delivery failed: {0}")]
    SmsDelivery(String),
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::Validation(msg) => AppError::BadRequest(msg),
            NotificationError::EmailDelivery(_) => AppError::Notification(ENQUIRY_FAILED.to_string()),
            NotificationError::SmsDelivery(reason) => AppError::Notification(format!(
                "Order placed but failed to send SMS. Error: {}",
                reason
            )),
        }
    }
}

impl IntoResponse for NotificationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
