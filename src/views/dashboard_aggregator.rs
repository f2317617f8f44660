use super::collection_cache::CollectionCache;
use super::request_sequence::{Outcome, RequestSequence};
use crate::error::ConsoleError;
use crate::http_handler::{Aircraft, AirlineService, Route};
use crate::{event, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Sum of the estimated route profits; routes without an estimate count as zero.
pub fn total_profit(routes: &[Route]) -> f64 {
    routes.iter().map(|r| r.estimated_profit().or_zero()).sum()
}

/// Mean over the routes that carry a profit estimate, rounded. Zero if none do.
pub fn average_profit(routes: &[Route]) -> f64 {
    let known: Vec<f64> = routes.iter().filter_map(|r| r.estimated_profit().known()).collect();
    if known.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = known.len() as f64;
    (known.iter().sum::<f64>() / count).round()
}

/// The route with the strictly greatest estimated profit.
///
/// Scanning starts with the first route as candidate; a later route only takes
/// over if both it and the candidate carry an estimate and its estimate is
/// strictly greater. Ties, and a first route without estimate, therefore
/// resolve to the earliest route.
pub fn most_profitable(routes: &[Route]) -> Option<&Route> {
    let mut routes_iter = routes.iter();
    let mut best = routes_iter.next()?;
    for route in routes_iter {
        let (Some(profit), Some(best_profit)) =
            (route.estimated_profit().known(), best.estimated_profit().known())
        else {
            continue;
        };
        if profit > best_profit {
            best = route;
        }
    }
    Some(best)
}

/// Summary figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    total_routes: usize,
    total_aircraft: usize,
    total_profit: f64,
    average_profit: f64,
    most_profitable: Option<Route>,
    recommended_aircraft: Option<Aircraft>,
}

impl DashboardStats {
    /// Derives everything but the recommended aircraft from the two collections.
    pub fn summarize(aircraft: &[Aircraft], routes: &[Route]) -> Self {
        Self {
            total_routes: routes.len(),
            total_aircraft: aircraft.len(),
            total_profit: total_profit(routes),
            average_profit: average_profit(routes),
            most_profitable: most_profitable(routes).cloned(),
            recommended_aircraft: None,
        }
    }

    pub fn total_routes(&self) -> usize { self.total_routes }
    pub fn total_aircraft(&self) -> usize { self.total_aircraft }
    pub fn total_profit(&self) -> f64 { self.total_profit }
    pub fn average_profit(&self) -> f64 { self.average_profit }
    pub fn most_profitable(&self) -> Option<&Route> { self.most_profitable.as_ref() }
    pub fn recommended_aircraft(&self) -> Option<&Aircraft> { self.recommended_aircraft.as_ref() }
}

/// Keeps the dashboard statistics, rebuilt from a full refetch on every refresh.
pub struct DashboardAggregator {
    service: Arc<dyn AirlineService>,
    cache: Arc<CollectionCache>,
    stats: RwLock<Option<Arc<DashboardStats>>>,
    seq: RequestSequence,
}

impl DashboardAggregator {
    pub(crate) fn new(service: Arc<dyn AirlineService>, cache: Arc<CollectionCache>) -> Self {
        Self { service, cache, stats: RwLock::new(None), seq: RequestSequence::new() }
    }

    /// The last successfully computed statistics.
    pub async fn stats(&self) -> Option<Arc<DashboardStats>> { self.stats.read().await.clone() }

    /// Refetches both collections and recomputes the statistics.
    ///
    /// If either collection cannot be fetched the previous statistics stay in
    /// place and the error is returned. A failed aircraft recommendation only
    /// leaves the recommended aircraft empty.
    pub async fn refresh(&self) -> Result<Outcome<Arc<DashboardStats>>, ConsoleError> {
        let ticket = self.seq.issue();
        let (aircraft, routes) =
            futures::try_join!(self.cache.refresh_aircraft(), self.cache.refresh_routes())?;

        let mut stats = DashboardStats::summarize(&aircraft, &routes);
        if let Some(route_id) = stats.most_profitable().map(Route::id) {
            match self.service.recommend_aircraft(route_id).await {
                Ok(ranked) => stats.recommended_aircraft = ranked.into_iter().next(),
                Err(e) => warn!("No aircraft recommendation for route {route_id}: {e}"),
            }
        }

        let mut current = self.stats.write().await;
        if !self.seq.is_current(ticket) {
            event!("Dropping stale dashboard statistics");
            return Ok(Outcome::Superseded);
        }
        let stats = Arc::new(stats);
        *current = Some(Arc::clone(&stats));
        Ok(Outcome::Applied(stats))
    }
}
