use std::time::Duration;

use crate::constants::{API_TOKEN_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::ClientError;
use crate::http::Transport;
use crate::resources::{CollectionAccessor, ModelAccessor};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: std::env::var(API_TOKEN_ENV).ok(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Entry point: one transport shared by every accessor.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Transport::new(
            &config.base_url,
            config.api_token.as_deref(),
            config.timeout,
        )?;
        Ok(Self { transport })
    }

    /// Client against the public API, token read from `REPLICATE_API_TOKEN`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn models(&self) -> ModelAccessor<'_> {
        ModelAccessor::new(&self.transport)
    }

    pub fn collections(&self) -> CollectionAccessor<'_> {
        self.models().collections()
    }
}
