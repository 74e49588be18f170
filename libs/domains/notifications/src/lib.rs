//! Notifications Domain
//!
//! Customer-facing messages sent on behalf of the storefront.
//!
//! - **Enquiries**: the contact form is mailed to the shop owner through an
//!   [`email::EmailProvider`]
//! - **Orders**: the customer gets an order confirmation SMS through an
//!   [`sms::SmsProvider`]
//!
//! Neither path retries; a failed send is reported to the caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_notifications::{handlers, EnquiryService, OrderService};
//!
//! let enquiries = EnquiryService::new(smtp_provider, "owner@example.com");
//! let orders = OrderService::new(twilio_provider, "+91");
//!
//! let router = handlers::router(enquiries, orders);
//! ```

pub mod config;
pub mod enquiry;
pub mod error;
pub mod handlers;
pub mod models;
pub mod order;

pub use config::NotificationConfig;
pub use enquiry::EnquiryService;
pub use error::{NotificationError, NotificationResult};
pub use handlers::ApiDoc;
pub use models::{Enquiry, MessageResponse, PlaceOrder};
pub use order::{OrderService, normalize_phone_number};
