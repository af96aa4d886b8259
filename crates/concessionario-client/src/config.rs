use std::time::Duration;

/// Default API root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "CONCESSIONARIO_API_URL";

/// Environment variable setting [`ClientConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "CONCESSIONARIO_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8080/api`. Request paths are appended.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely. Ignored on wasm32.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: None }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    /// Defaults overridden by `CONCESSIONARIO_API_URL` and
    /// `CONCESSIONARIO_TIMEOUT_SECS`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = Some(secs),
                _ => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }
        config
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
