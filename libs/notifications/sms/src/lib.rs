//! Outbound SMS for order confirmations.
//!
//! ## Components
//!
//! - **SMS Model**: [`Sms`]
//! - **Providers**: [`TwilioProvider`] (Twilio REST API over reqwest) and
//!   [`MockSmsProvider`] for tests, both behind the [`SmsProvider`] trait
//!
//! ## Usage
//!
//! ```ignore
//! use core_config::FromEnv;
//! use sms::{Sms, SmsProvider, TwilioConfig, TwilioProvider};
//!
//! let provider = TwilioProvider::new(TwilioConfig::from_env()?);
//! provider.send(&Sms::new("+919876543210", "Order placed")).await?;
//! ```

pub mod models;
pub mod provider;

pub use models::Sms;
pub use provider::{MockSmsProvider, SendResult, SmsProvider, TwilioConfig, TwilioProvider};
