use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use std::path::PathBuf;

use database::mongodb::MongoConfig;
use domain_notifications::NotificationConfig;
use email::SmtpConfig;
use sms::TwilioConfig;

pub use core_config::Environment;

/// Directory served under `/images` when `IMAGES_DIR` is unset
pub const DEFAULT_IMAGES_DIR: &str = "public/images";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Prefix for relative image paths stored on new records
    pub public_base_url: String,
    pub images_dir: PathBuf,
    pub smtp: SmtpConfig,
    pub twilio: TwilioConfig,
    pub notifications: NotificationConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let public_base_url = env_or_default("PUBLIC_BASE_URL", &server.local_url());

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            public_base_url,
            images_dir: PathBuf::from(env_or_default("IMAGES_DIR", DEFAULT_IMAGES_DIR)),
            smtp: SmtpConfig::from_env()?,
            twilio: TwilioConfig::from_env()?,
            notifications: NotificationConfig::from_env()?,
        })
    }
}
