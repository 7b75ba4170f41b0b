use crate::constants::{
    DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE, DEFAULT_TIMEOUT_SECONDS, USPS_ADDRESS_API_URL,
    USPS_TOKEN_URL,
};
use crate::error::{Result, ValidatorError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub usps: UspsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UspsConfig {
    pub token_url: String,
    pub address_url: String,
    pub batch_size: usize,
    pub delay_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for UspsConfig {
    fn default() -> Self {
        Self {
            token_url: USPS_TOKEN_URL.to_string(),
            address_url: USPS_ADDRESS_API_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            delay_ms: DEFAULT_BATCH_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Load endpoint and batching settings from config.toml, falling back
    /// to the defaults when no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ValidatorError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

/// Client identity for the token exchange, sourced from the environment
/// (.env is loaded at startup).
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("CLIENT_ID").map_err(|_| {
            ValidatorError::Config("CLIENT_ID is not set; add it to .env or the environment".into())
        })?;
        let client_secret = std::env::var("CLIENT_SECRET").map_err(|_| {
            ValidatorError::Config(
                "CLIENT_SECRET is not set; add it to .env or the environment".into(),
            )
        })?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}
