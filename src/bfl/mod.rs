pub mod image_client;

use crate::config::{FluxConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{ChronoFluxError, Result};

pub use image_client::ImageClient;

/// Entry point to the Flux API. The credential is resolved once here, at
/// construction, so a missing key fails at startup instead of at first use.
#[derive(Clone, Debug)]
pub struct FluxClient {
    image_client: ImageClient,
}

impl FluxClient {
    pub fn new(config: FluxConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ChronoFluxError::ConfigError("BFL_API_KEY is required but not set".into())
            })?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = config.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ChronoFluxError::ConfigError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            image_client: ImageClient::new(http, api_key, base_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
