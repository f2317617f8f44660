use super::collection_cache::CollectionCache;
use super::request_sequence::{Outcome, RequestSequence};
use crate::error::{ConsoleError, ValidationFailure};
use crate::http_handler::{Aircraft, AirlineService, Configuration, Route};
use crate::{event, info};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A configuration candidate prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView {
    /// The service's rank, or the position in the list if it sent none.
    pub rank: u32,
    pub label: String,
    pub is_default: bool,
    pub is_best: bool,
    pub configuration: Configuration,
}

impl CandidateView {
    /// Only a candidate the service itself ranked first counts as best; an
    /// unranked first entry is displayed at rank 1 without being flagged.
    pub fn new(position: usize, configuration: &Configuration) -> Self {
        let ordinal = u32::try_from(position + 1).unwrap_or(u32::MAX);
        let label = match configuration.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if configuration.is_default() => "Default".to_string(),
            _ => format!("Configuration {ordinal}"),
        };
        Self {
            rank: configuration.rank().unwrap_or(ordinal),
            label,
            is_default: configuration.is_default(),
            is_best: configuration.rank() == Some(1),
            configuration: configuration.clone(),
        }
    }
}

/// The selected aircraft's delivered cabin layout next to the selected route's demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguratorContext {
    pub default_seats: (u32, u32, u32),
    pub demand: (u32, u32, u32),
}

#[derive(Debug, Default)]
struct Selection {
    aircraft_id: Option<u64>,
    route_id: Option<u64>,
    candidates: Arc<Vec<Configuration>>,
    optimized: Option<Arc<Configuration>>,
    finding: bool,
    optimizing: bool,
}

/// Drives the cabin configurator: the aircraft/route selection and the
/// recommendation and optimization requests made for it.
///
/// Candidates and the optimized result belong to exactly one selection; any
/// change of selection drops them and turns outstanding responses stale.
pub struct RecommendationOrchestrator {
    service: Arc<dyn AirlineService>,
    cache: Arc<CollectionCache>,
    state: RwLock<Selection>,
    find_seq: RequestSequence,
    optimize_seq: RequestSequence,
}

impl RecommendationOrchestrator {
    pub(crate) fn new(service: Arc<dyn AirlineService>, cache: Arc<CollectionCache>) -> Self {
        Self {
            service,
            cache,
            state: RwLock::new(Selection::default()),
            find_seq: RequestSequence::new(),
            optimize_seq: RequestSequence::new(),
        }
    }

    /// Fetches the aircraft and route collections to choose from.
    pub async fn load(&self) -> Result<(Arc<Vec<Aircraft>>, Arc<Vec<Route>>), ConsoleError> {
        futures::try_join!(self.cache.refresh_aircraft(), self.cache.refresh_routes())
    }

    fn clear_results(&self, state: &mut Selection) {
        self.find_seq.invalidate();
        self.optimize_seq.invalidate();
        state.candidates = Arc::new(Vec::new());
        state.optimized = None;
        state.finding = false;
        state.optimizing = false;
    }

    pub async fn select_aircraft(&self, aircraft_id: Option<u64>) {
        let mut state = self.state.write().await;
        state.aircraft_id = aircraft_id;
        self.clear_results(&mut state);
    }

    pub async fn select_route(&self, route_id: Option<u64>) {
        let mut state = self.state.write().await;
        state.route_id = route_id;
        self.clear_results(&mut state);
    }

    async fn selection(&self) -> Result<(u64, u64), ConsoleError> {
        let state = self.state.read().await;
        match (state.aircraft_id, state.route_id) {
            (Some(aircraft), Some(route)) => Ok((aircraft, route)),
            _ => Err(ValidationFailure::MissingSelection.into()),
        }
    }

    /// Requests ranked configurations for the selection, replacing the current candidates.
    pub async fn find_configurations(
        &self,
    ) -> Result<Outcome<Arc<Vec<Configuration>>>, ConsoleError> {
        let (aircraft_id, route_id) = self.selection().await?;
        let ticket = self.find_seq.issue();
        self.state.write().await.finding = true;

        let fetched = self.service.recommend_configurations(aircraft_id, route_id).await;
        let mut state = self.state.write().await;
        if !self.find_seq.is_current(ticket) {
            event!("Dropping stale configurations for {aircraft_id}/{route_id}");
            return Ok(Outcome::Superseded);
        }
        state.finding = false;
        let candidates = Arc::new(fetched?);
        info!("Received {} configuration candidates", candidates.len());
        state.candidates = Arc::clone(&candidates);
        Ok(Outcome::Applied(candidates))
    }

    /// Requests the single optimized configuration for the selection.
    pub async fn optimize(&self) -> Result<Outcome<Option<Arc<Configuration>>>, ConsoleError> {
        let (aircraft_id, route_id) = self.selection().await?;
        let ticket = self.optimize_seq.issue();
        self.state.write().await.optimizing = true;

        let fetched = self.service.optimize_configuration(aircraft_id, route_id).await;
        let mut state = self.state.write().await;
        if !self.optimize_seq.is_current(ticket) {
            event!("Dropping stale optimization for {aircraft_id}/{route_id}");
            return Ok(Outcome::Superseded);
        }
        state.optimizing = false;
        let optimized = fetched?.map(Arc::new);
        state.optimized.clone_from(&optimized);
        Ok(Outcome::Applied(optimized))
    }

    pub async fn candidates(&self) -> Arc<Vec<Configuration>> {
        Arc::clone(&self.state.read().await.candidates)
    }

    pub async fn candidate_views(&self) -> Vec<CandidateView> {
        self.candidates()
            .await
            .iter()
            .enumerate()
            .map(|(pos, config)| CandidateView::new(pos, config))
            .collect()
    }

    pub async fn optimized(&self) -> Option<Arc<Configuration>> {
        self.state.read().await.optimized.clone()
    }

    pub async fn is_finding(&self) -> bool { self.state.read().await.finding }
    pub async fn is_optimizing(&self) -> bool { self.state.read().await.optimizing }

    pub async fn selected_aircraft(&self) -> Option<Aircraft> {
        let id = self.state.read().await.aircraft_id?;
        self.cache.aircraft().await.iter().find(|a| a.id() == id).cloned()
    }

    pub async fn selected_route(&self) -> Option<Route> {
        let id = self.state.read().await.route_id?;
        self.cache.routes().await.iter().find(|r| r.id() == id).cloned()
    }

    /// Seat and demand figures for the selection, if both are in the cache.
    pub async fn context(&self) -> Option<ConfiguratorContext> {
        let aircraft = self.selected_aircraft().await?;
        let route = self.selected_route().await?;
        Some(ConfiguratorContext {
            default_seats: (
                aircraft.capacity_eco(),
                aircraft.capacity_business(),
                aircraft.capacity_first(),
            ),
            demand: (route.demand_economy(), route.demand_business(), route.demand_first()),
        })
    }
}
