use super::airline_service::AirlineService;
use super::http_handler_common::{
    Aircraft, AircraftFilter, Configuration, HTTPError, LoginGrant, Registration, Route,
    RouteDraft, RouteSuggestion, User,
};
use super::http_response::response_common::{ErrorBody, ResponseError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

/// In-process stand-in for the fleet service.
///
/// Every capability is recorded by name. Capabilities can be switched to fail
/// with [`ResponseError::NoConnection`], and a single upcoming call of a
/// capability can be held back until the returned [`Notify`] is signalled. A held
/// call snapshots its answer when it is issued, not when it is released.
#[derive(Default)]
pub(crate) struct MockService {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    accounts: HashMap<String, (String, User)>,
    sessions: HashMap<String, User>,
    credential: Option<String>,
    issued_tokens: u64,
    aircraft: Vec<Aircraft>,
    filtered: Vec<Aircraft>,
    routes: Vec<Route>,
    recommended_aircraft: Vec<Aircraft>,
    recommended_routes: Vec<RouteSuggestion>,
    configurations: Vec<Configuration>,
    optimized: Option<Configuration>,
    failing: HashSet<&'static str>,
    gates: HashMap<&'static str, Arc<Notify>>,
    calls: Vec<&'static str>,
    filters: Vec<AircraftFilter>,
    route_queries: Vec<(String, Option<u64>)>,
    registrations: Vec<Registration>,
}

fn unauthorized() -> HTTPError { ResponseError::Unauthorized(ErrorBody::default()).into() }
fn unreachable_service() -> HTTPError { ResponseError::NoConnection.into() }
fn not_found() -> HTTPError { ResponseError::NotFound(ErrorBody::default()).into() }

impl MockService {
    pub(crate) fn new() -> Arc<Self> { Arc::new(Self::default()) }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn register_account(&self, email: &str, password: &str, user: User) {
        self.lock().accounts.insert(email.to_string(), (password.to_string(), user));
    }

    /// Invalidates a previously issued token on the service side.
    pub(crate) fn revoke(&self, token: &str) { self.lock().sessions.remove(token); }

    pub(crate) fn set_aircraft(&self, aircraft: Vec<Aircraft>) { self.lock().aircraft = aircraft; }
    pub(crate) fn set_filtered(&self, aircraft: Vec<Aircraft>) { self.lock().filtered = aircraft; }
    pub(crate) fn set_routes(&self, routes: Vec<Route>) { self.lock().routes = routes; }
    pub(crate) fn set_recommended_aircraft(&self, aircraft: Vec<Aircraft>) {
        self.lock().recommended_aircraft = aircraft;
    }
    pub(crate) fn set_recommended_routes(&self, routes: Vec<RouteSuggestion>) {
        self.lock().recommended_routes = routes;
    }
    pub(crate) fn set_configurations(&self, configurations: Vec<Configuration>) {
        self.lock().configurations = configurations;
    }
    pub(crate) fn set_optimized(&self, configuration: Option<Configuration>) {
        self.lock().optimized = configuration;
    }

    pub(crate) fn fail(&self, capability: &'static str) { self.lock().failing.insert(capability); }
    pub(crate) fn recover(&self, capability: &'static str) {
        self.lock().failing.remove(capability);
    }

    /// Holds back the next call of `capability` until the returned gate is notified.
    pub(crate) fn hold(&self, capability: &'static str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.lock().gates.insert(capability, Arc::clone(&gate));
        gate
    }

    pub(crate) fn calls(&self, capability: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == capability).count()
    }
    pub(crate) fn total_calls(&self) -> usize { self.lock().calls.len() }
    pub(crate) fn credential(&self) -> Option<String> { self.lock().credential.clone() }
    pub(crate) fn last_filter(&self) -> Option<AircraftFilter> {
        self.lock().filters.last().cloned()
    }
    pub(crate) fn last_route_query(&self) -> Option<(String, Option<u64>)> {
        self.lock().route_queries.last().cloned()
    }
    pub(crate) fn registrations(&self) -> Vec<Registration> { self.lock().registrations.clone() }

    /// Records the call and takes its gate; fails if the capability is switched off.
    fn enter(&self, capability: &'static str) -> Result<Option<Arc<Notify>>, HTTPError> {
        let mut state = self.lock();
        state.calls.push(capability);
        let gate = state.gates.remove(capability);
        if state.failing.contains(capability) {
            return Err(unreachable_service());
        }
        Ok(gate)
    }

    async fn pass<T>(gate: Option<Arc<Notify>>, value: T) -> T {
        if let Some(gate) = gate {
            gate.notified().await;
        }
        value
    }
}

#[async_trait(?Send)]
impl AirlineService for MockService {
    fn set_credential(&self, token: Option<String>) { self.lock().credential = token; }

    async fn register(&self, registration: &Registration) -> Result<(), HTTPError> {
        let gate = self.enter("register")?;
        let outcome = {
            let mut state = self.lock();
            state.registrations.push(registration.clone());
            if state.accounts.contains_key(&registration.email) {
                Err(ResponseError::BadRequest(ErrorBody::default()).into())
            } else {
                Ok(())
            }
        };
        Self::pass(gate, outcome).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, HTTPError> {
        let gate = self.enter("login")?;
        let outcome = {
            let mut state = self.lock();
            match state.accounts.get(email).cloned() {
                Some((expected, user)) if expected == password => {
                    state.issued_tokens += 1;
                    let token = format!("token-{}", state.issued_tokens);
                    state.sessions.insert(token.clone(), user.clone());
                    Ok(LoginGrant { token, user })
                }
                _ => Err(unauthorized()),
            }
        };
        Self::pass(gate, outcome).await
    }

    async fn current_user(&self) -> Result<User, HTTPError> {
        let gate = self.enter("current_user")?;
        let outcome = {
            let state = self.lock();
            state
                .credential
                .as_ref()
                .and_then(|token| state.sessions.get(token).cloned())
                .ok_or_else(unauthorized)
        };
        Self::pass(gate, outcome).await
    }

    async fn logout(&self) -> Result<(), HTTPError> {
        let gate = self.enter("logout")?;
        let outcome = {
            let mut state = self.lock();
            if let Some(token) = state.credential.clone() {
                state.sessions.remove(&token);
            }
            Ok(())
        };
        Self::pass(gate, outcome).await
    }

    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, HTTPError> {
        let gate = self.enter("list_aircraft")?;
        let aircraft = self.lock().aircraft.clone();
        Ok(Self::pass(gate, aircraft).await)
    }

    async fn get_aircraft(&self, id: u64) -> Result<Aircraft, HTTPError> {
        let gate = self.enter("get_aircraft")?;
        let found = self.lock().aircraft.iter().find(|a| a.id() == id).cloned();
        Self::pass(gate, found.ok_or_else(not_found)).await
    }

    async fn filter_aircraft(&self, filter: &AircraftFilter) -> Result<Vec<Aircraft>, HTTPError> {
        let gate = self.enter("filter_aircraft")?;
        let filtered = {
            let mut state = self.lock();
            state.filters.push(filter.clone());
            state.filtered.clone()
        };
        Ok(Self::pass(gate, filtered).await)
    }

    async fn recommend_aircraft(&self, _route_id: u64) -> Result<Vec<Aircraft>, HTTPError> {
        let gate = self.enter("recommend_aircraft")?;
        let aircraft = self.lock().recommended_aircraft.clone();
        Ok(Self::pass(gate, aircraft).await)
    }

    async fn list_routes(&self) -> Result<Vec<Route>, HTTPError> {
        let gate = self.enter("list_routes")?;
        let routes = self.lock().routes.clone();
        Ok(Self::pass(gate, routes).await)
    }

    async fn get_route(&self, id: u64) -> Result<Route, HTTPError> {
        let gate = self.enter("get_route")?;
        let found = self.lock().routes.iter().find(|r| r.id() == id).cloned();
        Self::pass(gate, found.ok_or_else(not_found)).await
    }

    async fn create_route(&self, _draft: &RouteDraft) -> Result<Route, HTTPError> {
        let gate = self.enter("create_route")?;
        let created = {
            let mut state = self.lock();
            let id = state.routes.iter().map(Route::id).max().unwrap_or(0) + 1;
            let route = Route::test(id, None);
            state.routes.push(route.clone());
            route
        };
        Ok(Self::pass(gate, created).await)
    }

    async fn update_route(&self, id: u64, draft: &RouteDraft) -> Result<Route, HTTPError> {
        let gate = self.enter("update_route")?;
        let updated = {
            let mut state = self.lock();
            state.routes.iter_mut().find(|r| r.id() == id).map(|route| {
                route.retarget(draft);
                route.clone()
            })
        };
        Self::pass(gate, updated.ok_or_else(not_found)).await
    }

    async fn delete_route(&self, id: u64) -> Result<(), HTTPError> {
        let gate = self.enter("delete_route")?;
        let outcome = {
            let mut state = self.lock();
            let before = state.routes.len();
            state.routes.retain(|r| r.id() != id);
            if state.routes.len() == before { Err(not_found()) } else { Ok(()) }
        };
        Self::pass(gate, outcome).await
    }

    async fn recommend_routes(
        &self,
        hub: &str,
        aircraft_id: Option<u64>,
    ) -> Result<Vec<RouteSuggestion>, HTTPError> {
        let gate = self.enter("recommend_routes")?;
        let routes = {
            let mut state = self.lock();
            state.route_queries.push((hub.to_string(), aircraft_id));
            state.recommended_routes.clone()
        };
        Ok(Self::pass(gate, routes).await)
    }

    async fn recommend_configurations(
        &self,
        _aircraft_id: u64,
        _route_id: u64,
    ) -> Result<Vec<Configuration>, HTTPError> {
        let gate = self.enter("recommend_configurations")?;
        let configurations = self.lock().configurations.clone();
        Ok(Self::pass(gate, configurations).await)
    }

    async fn optimize_configuration(
        &self,
        _aircraft_id: u64,
        _route_id: u64,
    ) -> Result<Option<Configuration>, HTTPError> {
        let gate = self.enter("optimize_configuration")?;
        let optimized = self.lock().optimized.clone();
        Ok(Self::pass(gate, optimized).await)
    }
}
