use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dev.to/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Dev.to configuration, resolved once at startup from CLI flags and environment variables
#[derive(Debug, Clone)]
pub struct DevToConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl DevToConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build the configuration from the global CLI options.
    /// An empty API key counts as no key.
    pub fn from_global(global: &crate::Global) -> Self {
        let config = Self::new(global.base_url.clone())
            .with_timeout(Duration::from_secs(global.timeout));

        match global.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => config.with_api_key(key),
            _ => config,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
