use std::env;
use std::time::Duration;

/// Default endpoint of the Black Forest Labs Flux API.
pub const DEFAULT_BASE_URL: &str = "https://api.us1.bfl.ai/v1";

/// Default per-call HTTP timeout. Generation itself can take tens of seconds,
/// but each individual call (submit, poll, download) is short.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct FluxConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for FluxConfig {
    fn default() -> Self {
        FluxConfig {
            api_key: None,
            base_url: None,
            timeout: None,
        }
    }
}

impl FluxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("BFL_API_KEY").ok();
        let base_url = env::var("BFL_BASE_URL").ok();
        let timeout = env::var("BFL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs);

        FluxConfig {
            api_key,
            base_url,
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
