use crate::warn;
use std::{path::PathBuf, time::Duration};

/// Runtime settings of the console, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Root URL of the remote fleet service, prepended to every endpoint.
    api_url: String,
    /// File the credential token is persisted to between runs.
    token_path: PathBuf,
    /// Per-request timeout handed to the transport.
    request_timeout: Duration,
}

impl ConsoleConfig {
    const API_URL_VAR: &'static str = "FLEET_API_URL";
    const TOKEN_PATH_VAR: &'static str = "FLEET_TOKEN_PATH";
    const TIMEOUT_VAR: &'static str = "FLEET_HTTP_TIMEOUT_SECS";

    const DEFAULT_API_URL: &'static str = "http://localhost:5000/api";
    const DEFAULT_TOKEN_PATH: &'static str = "./.fleet_token";
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for missing or malformed values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let api_url = lookup(Self::API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string());
        let token_path = lookup(Self::TOKEN_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_TOKEN_PATH), PathBuf::from);
        let request_timeout = match lookup(Self::TIMEOUT_VAR) {
            None => Self::DEFAULT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Ignoring invalid {}={raw:?}, using {}s",
                        Self::TIMEOUT_VAR,
                        Self::DEFAULT_TIMEOUT.as_secs()
                    );
                    Self::DEFAULT_TIMEOUT
                }
            },
        };
        Self { api_url, token_path, request_timeout }
    }

    pub fn api_url(&self) -> &str { &self.api_url }
    pub fn token_path(&self) -> &PathBuf { &self.token_path }
    pub fn request_timeout(&self) -> Duration { self.request_timeout }
}
