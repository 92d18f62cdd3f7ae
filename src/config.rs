use crate::{Error, ProviderConfig};
use std::env;

/// Port the long-running server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub provider: ProviderConfig,
    pub port: u16,
}

impl Config {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            port: DEFAULT_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let provider = ProviderConfig::from_env()?;
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT '{value}'")))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { provider, port })
    }
}
