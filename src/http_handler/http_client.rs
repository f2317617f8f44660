use super::http_request::request_common::RequestError;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the fleet service.
/// Besides the base URL it carries the bearer credential currently handed to it
/// by the session layer; requests are sent anonymously while none is set.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// The in-memory bearer credential attached to outgoing requests.
    credential: RwLock<Option<String>>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:5000/api"`).
    /// * `timeout` – The per-request timeout.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance or the builder error.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<HTTPClient, RequestError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HTTPClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: RwLock::new(None),
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Replaces the bearer credential used for subsequent requests.
    pub(crate) fn set_credential(&self, token: Option<String>) {
        *self.credential.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Returns `true` if requests are currently sent with a bearer credential.
    pub(crate) fn has_credential(&self) -> bool {
        self.credential.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Attaches the bearer credential to `builder` if one is held.
    pub(super) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credential.read().unwrap_or_else(PoisonError::into_inner).as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
