//! MongoDB connector and utilities
//!
//! Provides startup connection (with retries) and the readiness ping.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, MAX_RETRY_DELAY_MS, MongoConfig};
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
