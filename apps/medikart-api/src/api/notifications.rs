//! Enquiry and order notification routes
//!
//! Builds the SMTP relay and the Twilio gateway once; both are shared by every
//! request through the domain services.

use axum::Router;
use domain_notifications::{EnquiryService, OrderService, handlers};
use email::SmtpProvider;
use sms::TwilioProvider;
use tracing::info;

use crate::config::Config;

/// Mounted at the root: `POST /se` and `POST /place-order`
pub fn router(config: &Config) -> eyre::Result<Router> {
    let relay = SmtpProvider::new(config.smtp.clone())?;
    let gateway = TwilioProvider::new(config.twilio.clone());

    info!(
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        sms_from = %config.twilio.from_number,
        "Notification providers configured"
    );

    let enquiries = EnquiryService::new(relay, config.notifications.enquiry_recipient.clone());
    let orders = OrderService::new(gateway, config.notifications.country_code.clone());

    Ok(handlers::router(enquiries, orders))
}
