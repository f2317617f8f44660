use crate::config::ConsoleConfig;
use crate::http_handler::{AirlineService, HTTPClient, http_request::request_common::RequestError};
use crate::session::{AccessGate, FileTokenStore, Session, SessionStore, TokenStore};
use crate::views::{
    CollectionCache, DashboardAggregator, FilterEngine, RecommendationOrchestrator, RouteFinder,
};
use std::sync::Arc;

/// Struct holding the long-lived components of the console, providing access
/// to the service client and the session store, and building the views that
/// depend on them.
#[derive(Clone)]
pub struct Keychain {
    /// The service the views talk to.
    service: Arc<dyn AirlineService>,
    /// The single session of this process.
    session: Arc<SessionStore>,
}

impl Keychain {
    /// Creates the HTTP client and the file backed session store described by `config`.
    ///
    /// # Returns
    /// A new `Keychain` or the error raised while building the HTTP client.
    pub fn new(config: &ConsoleConfig) -> Result<Self, RequestError> {
        let client = Arc::new(HTTPClient::new(config.api_url(), config.request_timeout())?);
        let tokens = Arc::new(FileTokenStore::new(config.token_path()));
        Ok(Self::with_parts(client, tokens))
    }

    /// Assembles a `Keychain` from an arbitrary service and token store.
    pub(crate) fn with_parts(
        service: Arc<dyn AirlineService>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(Arc::clone(&service), tokens));
        Self { service, session }
    }

    /// Provides a cloned reference to the session store.
    pub fn session(&self) -> Arc<SessionStore> { Arc::clone(&self.session) }

    /// Creates a new access gate observing the session store.
    pub fn gate(&self) -> AccessGate { AccessGate::new(self.session.subscribe()) }

    fn cache(&self) -> Arc<CollectionCache> {
        Arc::new(CollectionCache::new(Arc::clone(&self.service)))
    }

    pub fn collections(&self) -> Arc<CollectionCache> { self.cache() }

    pub fn filter_engine(&self) -> FilterEngine {
        FilterEngine::new(Arc::clone(&self.service), self.cache())
    }

    pub fn configurator(&self) -> RecommendationOrchestrator {
        RecommendationOrchestrator::new(Arc::clone(&self.service), self.cache())
    }

    pub fn dashboard(&self) -> DashboardAggregator {
        DashboardAggregator::new(Arc::clone(&self.service), self.cache())
    }

    pub fn route_finder(&self, session: Option<&Session>) -> RouteFinder {
        RouteFinder::new(Arc::clone(&self.service), session)
    }
}
