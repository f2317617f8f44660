use super::request_sequence::RequestSequence;
use crate::error::ConsoleError;
use crate::http_handler::{Aircraft, AirlineService, Route, RouteDraft};
use crate::{event, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Last-fetched aircraft and route collections of one view.
///
/// Snapshots are immutable and only ever replaced as a whole. A failed fetch
/// leaves the previous snapshot in place.
pub struct CollectionCache {
    service: Arc<dyn AirlineService>,
    aircraft: RwLock<Arc<Vec<Aircraft>>>,
    routes: RwLock<Arc<Vec<Route>>>,
    aircraft_seq: RequestSequence,
    routes_seq: RequestSequence,
}

impl CollectionCache {
    pub(crate) fn new(service: Arc<dyn AirlineService>) -> Self {
        Self {
            service,
            aircraft: RwLock::new(Arc::new(Vec::new())),
            routes: RwLock::new(Arc::new(Vec::new())),
            aircraft_seq: RequestSequence::new(),
            routes_seq: RequestSequence::new(),
        }
    }

    pub async fn aircraft(&self) -> Arc<Vec<Aircraft>> { Arc::clone(&*self.aircraft.read().await) }
    pub async fn routes(&self) -> Arc<Vec<Route>> { Arc::clone(&*self.routes.read().await) }

    /// Refetches the aircraft collection and returns the snapshot in effect afterwards.
    ///
    /// If a later refetch was issued meanwhile, this response is dropped and the
    /// current snapshot is returned instead.
    pub async fn refresh_aircraft(&self) -> Result<Arc<Vec<Aircraft>>, ConsoleError> {
        let ticket = self.aircraft_seq.issue();
        let fetched = self.service.list_aircraft().await?;
        let mut snapshot = self.aircraft.write().await;
        if self.aircraft_seq.is_current(ticket) {
            *snapshot = Arc::new(fetched);
        } else {
            event!("Dropping stale aircraft collection");
        }
        Ok(Arc::clone(&*snapshot))
    }

    /// Refetches the route collection, see [`CollectionCache::refresh_aircraft`].
    pub async fn refresh_routes(&self) -> Result<Arc<Vec<Route>>, ConsoleError> {
        let ticket = self.routes_seq.issue();
        let fetched = self.service.list_routes().await?;
        let mut snapshot = self.routes.write().await;
        if self.routes_seq.is_current(ticket) {
            *snapshot = Arc::new(fetched);
        } else {
            event!("Dropping stale route collection");
        }
        Ok(Arc::clone(&*snapshot))
    }

    /// Looks the aircraft up in the snapshot, asking the service if it is not cached.
    pub async fn aircraft_by_id(&self, id: u64) -> Result<Aircraft, ConsoleError> {
        if let Some(found) = self.aircraft.read().await.iter().find(|a| a.id() == id) {
            return Ok(found.clone());
        }
        Ok(self.service.get_aircraft(id).await?)
    }

    /// Looks the route up in the snapshot, asking the service if it is not cached.
    pub async fn route_by_id(&self, id: u64) -> Result<Route, ConsoleError> {
        if let Some(found) = self.routes.read().await.iter().find(|r| r.id() == id) {
            return Ok(found.clone());
        }
        Ok(self.service.get_route(id).await?)
    }

    pub async fn create_route(&self, draft: &RouteDraft) -> Result<Route, ConsoleError> {
        let route = self.service.create_route(draft).await?;
        self.refetch_routes_after_mutation().await;
        Ok(route)
    }

    pub async fn update_route(&self, id: u64, draft: &RouteDraft) -> Result<Route, ConsoleError> {
        let route = self.service.update_route(id, draft).await?;
        self.refetch_routes_after_mutation().await;
        Ok(route)
    }

    pub async fn delete_route(&self, id: u64) -> Result<(), ConsoleError> {
        self.service.delete_route(id).await?;
        self.refetch_routes_after_mutation().await;
        Ok(())
    }

    /// The mutation itself went through; a failed refetch only leaves the snapshot outdated.
    async fn refetch_routes_after_mutation(&self) {
        if let Err(e) = self.refresh_routes().await {
            warn!("Route collection may be outdated: {}", e.detail());
        }
    }
}
