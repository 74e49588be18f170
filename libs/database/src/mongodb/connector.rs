use mongodb::{Client, bson::doc, options::ClientOptions};
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

use super::MongoConfig;
use super::config::MAX_RETRY_DELAY_MS;

/// Error type for MongoDB connection operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    /// Bad connection string or client options; retrying cannot help
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server did not answer the startup ping
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl MongoError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, MongoError::ConnectionFailed(_))
    }
}

/// Connect using a [`MongoConfig`] and verify the server answers a ping
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect at startup, retrying while the server is unreachable.
///
/// Makes up to `config.connect_retries` extra attempts, waiting
/// `config.retry_delay_ms` before the first and doubling up to
/// [`MAX_RETRY_DELAY_MS`]. Configuration errors fail immediately.
///
/// ```ignore
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config_with_retry(&config).await?;
/// ```
pub async fn connect_from_config_with_retry(config: &MongoConfig) -> Result<Client, MongoError> {
    with_startup_retries(config, || connect_from_config(config)).await
}

async fn with_startup_retries<T, F, Fut>(
    config: &MongoConfig,
    mut connect: F,
) -> Result<T, MongoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, MongoError>>,
{
    let mut attempt = 0;
    let mut delay_ms = config.retry_delay_ms;

    loop {
        match connect().await {
            Ok(connected) => {
                if attempt > 0 {
                    info!(retries = attempt, "MongoDB reachable after retrying");
                }
                return Ok(connected);
            }
            Err(e) if !e.is_retryable() || attempt >= config.connect_retries => return Err(e),
            Err(e) => {
                attempt += 1;
                warn!(
                    attempt,
                    max_retries = config.connect_retries,
                    delay_ms,
                    error = %e,
                    "MongoDB not reachable yet, retrying"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = delay_ms.saturating_mul(2).min(MAX_RETRY_DELAY_MS);
            }
        }
    }
}
