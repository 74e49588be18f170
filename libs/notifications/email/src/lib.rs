//! Transactional email for the storefront.
//!
//! ## Components
//!
//! - **Email Model**: [`Email`] built with a small fluent API
//! - **Providers**: [`SmtpProvider`] (lettre relay) and [`MockEmailProvider`] for tests,
//!   both behind the [`EmailProvider`] trait
//!
//! ## Usage
//!
//! ```ignore
//! use core_config::FromEnv;
//! use email::{Email, EmailProvider, SmtpConfig, SmtpProvider};
//!
//! let provider = SmtpProvider::new(SmtpConfig::from_env()?)?;
//! let email = Email::new("shop@example.com", "New Enquiry Received").with_text("Name: Asha");
//! provider.send(&email).await?;
//! ```

pub mod models;
pub mod provider;

pub use models::Email;
pub use provider::{EmailProvider, MockEmailProvider, SendResult, SmtpConfig, SmtpProvider};
