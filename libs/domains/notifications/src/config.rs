use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Country code prefixed to order phone numbers that lack one
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Routing settings for outgoing notifications
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Mailbox that receives contact form enquiries
    pub enquiry_recipient: String,
    pub country_code: String,
}

impl FromEnv for NotificationConfig {
    /// `ENQUIRY_RECIPIENT` falls back to the relay account in `EMAIL_USER`.
    fn from_env() -> Result<Self, ConfigError> {
        let enquiry_recipient =
            env_required("ENQUIRY_RECIPIENT").or_else(|_| env_required("EMAIL_USER"))?;

        Ok(Self {
            enquiry_recipient,
            country_code: env_or_default("SMS_COUNTRY_CODE", DEFAULT_COUNTRY_CODE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_falls_back_to_email_user() {
        temp_env::with_vars(
            [
                ("ENQUIRY_RECIPIENT", None),
                ("EMAIL_USER", Some("shop@example.com")),
                ("SMS_COUNTRY_CODE", None),
            ],
            || {
                let config = NotificationConfig::from_env().unwrap();
                assert_eq!(config.enquiry_recipient, "shop@example.com");
                assert_eq!(config.country_code, "+91");
            },
        );
    }

    #[test]
    fn test_explicit_values() {
        temp_env::with_vars(
            [
                ("ENQUIRY_RECIPIENT", Some("owner@example.com")),
                ("EMAIL_USER", Some("shop@example.com")),
                ("SMS_COUNTRY_CODE", Some("+44")),
            ],
            || {
                let config = NotificationConfig::from_env().unwrap();
                assert_eq!(config.enquiry_recipient, "owner@example.com");
                assert_eq!(config.country_code, "+44");
            },
        );
    }

    #[test]
    fn test_missing_recipient_reports_email_user() {
        temp_env::with_vars_unset(["ENQUIRY_RECIPIENT", "EMAIL_USER"], || {
            let err = NotificationConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("EMAIL_USER"));
        });
    }
}
