use std::env;

/// Application-level constants
pub const APP_NAME: &str = "OdontoSys";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming the backend base URL.
pub const ENV_API_URL: &str = "ODONTOSYS_API_URL";
/// Environment variable overriding the HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT: &str = "ODONTOSYS_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Where the clinic backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    /// Read the backend endpoint from the environment, falling back to
    /// the local development defaults.
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = parse_timeout(env::var(ENV_HTTP_TIMEOUT).ok());
        Self {
            base_url,
            timeout_secs,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT_SECS)
    }
}

fn parse_timeout(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
}
