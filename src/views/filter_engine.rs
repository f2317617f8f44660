use super::collection_cache::CollectionCache;
use super::request_sequence::{Outcome, RequestSequence};
use crate::error::ConsoleError;
use crate::http_handler::{Aircraft, AircraftFilter, AirlineService};
use crate::{event, log};
use itertools::Itertools;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Derives the filtered aircraft view from the cached collection and the
/// operator's criteria.
pub struct FilterEngine {
    service: Arc<dyn AirlineService>,
    cache: Arc<CollectionCache>,
    state: RwLock<FilterState>,
    seq: RequestSequence,
}

#[derive(Debug, Default)]
struct FilterState {
    criteria: AircraftFilter,
    view: Arc<Vec<Aircraft>>,
}

impl FilterEngine {
    pub(crate) fn new(service: Arc<dyn AirlineService>, cache: Arc<CollectionCache>) -> Self {
        Self { service, cache, state: RwLock::new(FilterState::default()), seq: RequestSequence::new() }
    }

    pub async fn criteria(&self) -> AircraftFilter { self.state.read().await.criteria.clone() }
    pub async fn view(&self) -> Arc<Vec<Aircraft>> { Arc::clone(&self.state.read().await.view) }

    /// Fetches the full collection; with no criteria set it becomes the view.
    pub async fn load(&self) -> Result<Arc<Vec<Aircraft>>, ConsoleError> {
        let ticket = self.seq.issue();
        let full = self.cache.refresh_aircraft().await?;
        let mut state = self.state.write().await;
        if state.criteria.is_empty() && self.seq.is_current(ticket) {
            state.view = Arc::clone(&full);
        }
        Ok(full)
    }

    /// Replaces the criteria without fetching. Outstanding results go stale.
    pub async fn set_criteria(&self, criteria: AircraftFilter) {
        self.seq.invalidate();
        self.state.write().await.criteria = criteria;
    }

    /// Computes the view for the current criteria.
    ///
    /// Without criteria the full cached collection is used and the service is
    /// not contacted. A failed fetch keeps the previous view.
    pub async fn apply(&self) -> Result<Outcome<Arc<Vec<Aircraft>>>, ConsoleError> {
        let ticket = self.seq.issue();
        let criteria = self.criteria().await;
        if criteria.is_empty() {
            let full = self.cache.aircraft().await;
            self.state.write().await.view = Arc::clone(&full);
            return Ok(Outcome::Applied(full));
        }

        log!(
            "Filtering aircraft by {}",
            criteria.sparse_params().iter().map(|(key, val)| format!("{key}={val}")).join(", ")
        );
        let fetched = self.service.filter_aircraft(&criteria).await;
        let mut state = self.state.write().await;
        if !self.seq.is_current(ticket) {
            event!("Dropping stale aircraft filter result");
            return Ok(Outcome::Superseded);
        }
        let view = Arc::new(fetched?);
        state.view = Arc::clone(&view);
        Ok(Outcome::Applied(view))
    }

    /// Shorthand for [`FilterEngine::set_criteria`] followed by [`FilterEngine::apply`].
    pub async fn filter(
        &self,
        criteria: AircraftFilter,
    ) -> Result<Outcome<Arc<Vec<Aircraft>>>, ConsoleError> {
        self.set_criteria(criteria).await;
        self.apply().await
    }

    /// Clears all criteria and restores the full collection.
    pub async fn reset(&self) -> Arc<Vec<Aircraft>> {
        self.seq.invalidate();
        let full = self.cache.aircraft().await;
        let mut state = self.state.write().await;
        state.criteria = AircraftFilter::default();
        state.view = Arc::clone(&full);
        full
    }
}
