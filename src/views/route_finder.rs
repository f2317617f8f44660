use super::request_sequence::{Outcome, RequestSequence};
use crate::error::{ConsoleError, ValidationFailure};
use crate::http_handler::{AirlineService, RouteSuggestion};
use crate::session::Session;
use crate::{event, info};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct FinderState {
    hub: String,
    aircraft_id: Option<u64>,
    routes: Arc<Vec<RouteSuggestion>>,
    searching: bool,
}

/// Route recommendations for a hub, optionally narrowed to one aircraft.
pub struct RouteFinder {
    service: Arc<dyn AirlineService>,
    state: RwLock<FinderState>,
    seq: RequestSequence,
}

impl RouteFinder {
    /// Starts out at the hub of the session's airline, if there is one.
    pub(crate) fn new(service: Arc<dyn AirlineService>, session: Option<&Session>) -> Self {
        let hub = session
            .and_then(|s| s.user().hub_airport_code())
            .unwrap_or_default()
            .to_string();
        Self {
            service,
            state: RwLock::new(FinderState { hub, ..FinderState::default() }),
            seq: RequestSequence::new(),
        }
    }

    pub async fn hub(&self) -> String { self.state.read().await.hub.clone() }
    pub async fn aircraft_id(&self) -> Option<u64> { self.state.read().await.aircraft_id }
    pub async fn routes(&self) -> Arc<Vec<RouteSuggestion>> { Arc::clone(&self.state.read().await.routes) }
    pub async fn is_searching(&self) -> bool { self.state.read().await.searching }

    fn clear(&self, state: &mut FinderState) {
        self.seq.invalidate();
        state.routes = Arc::new(Vec::new());
        state.searching = false;
    }

    pub async fn set_hub(&self, hub: &str) {
        let mut state = self.state.write().await;
        state.hub = hub.trim().to_uppercase();
        self.clear(&mut state);
    }

    pub async fn set_aircraft(&self, aircraft_id: Option<u64>) {
        let mut state = self.state.write().await;
        state.aircraft_id = aircraft_id;
        self.clear(&mut state);
    }

    /// Requests recommended routes, replacing the current list.
    ///
    /// A failed request keeps the previous list.
    pub async fn search(&self) -> Result<Outcome<Arc<Vec<RouteSuggestion>>>, ConsoleError> {
        let (hub, aircraft_id) = {
            let state = self.state.read().await;
            (state.hub.clone(), state.aircraft_id)
        };
        if hub.is_empty() {
            return Err(ValidationFailure::MissingHub.into());
        }
        let ticket = self.seq.issue();
        self.state.write().await.searching = true;

        let fetched = self.service.recommend_routes(&hub, aircraft_id).await;
        let mut state = self.state.write().await;
        if !self.seq.is_current(ticket) {
            event!("Dropping stale route recommendations for {hub}");
            return Ok(Outcome::Superseded);
        }
        state.searching = false;
        let routes = Arc::new(fetched?);
        info!("{} routes recommended from {hub}", routes.len());
        state.routes = Arc::clone(&routes);
        Ok(Outcome::Applied(routes))
    }
}
