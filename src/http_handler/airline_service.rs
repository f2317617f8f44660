use super::http_client::HTTPClient;
use super::http_handler_common::{
    Aircraft, AircraftFilter, Configuration, HTTPError, LoginGrant, Registration, Route,
    RouteDraft, RouteSuggestion, User,
};
use super::http_request::{
    aircraft_filter_get::AircraftFilterRequest,
    aircraft_get::AircraftDetailRequest,
    aircraft_list_get::AircraftListRequest,
    aircraft_recommend_get::AircraftRecommendRequest,
    config_optimize_post::ConfigOptimizeRequest,
    config_recommend_get::ConfigRecommendRequest,
    login_post::LoginRequest,
    logout_post::LogoutRequest,
    register_post::RegisterRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    route_create_post::RouteCreateRequest,
    route_delete_delete::RouteDeleteRequest,
    route_get::RouteDetailRequest,
    route_list_get::RouteListRequest,
    route_recommend_get::RouteRecommendRequest,
    route_update_put::RouteUpdateRequest,
    user_get::CurrentUserRequest,
};
use super::http_response::response_common::{ErrorBody, ResponseError};
use crate::event;
use async_trait::async_trait;

/// The capabilities of the remote fleet service the console consumes.
///
/// Components only ever see this trait; [`HTTPClient`] is the production
/// implementation. Futures are not required to be `Send`, all work runs on a
/// single cooperative task.
#[async_trait(?Send)]
pub(crate) trait AirlineService: Send + Sync {
    /// Replaces the bearer credential attached to subsequent requests.
    fn set_credential(&self, token: Option<String>);

    async fn register(&self, registration: &Registration) -> Result<(), HTTPError>;
    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, HTTPError>;
    /// Resolves the user behind the currently held credential.
    async fn current_user(&self) -> Result<User, HTTPError>;
    async fn logout(&self) -> Result<(), HTTPError>;

    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, HTTPError>;
    async fn get_aircraft(&self, id: u64) -> Result<Aircraft, HTTPError>;
    async fn filter_aircraft(&self, filter: &AircraftFilter) -> Result<Vec<Aircraft>, HTTPError>;
    async fn recommend_aircraft(&self, route_id: u64) -> Result<Vec<Aircraft>, HTTPError>;

    async fn list_routes(&self) -> Result<Vec<Route>, HTTPError>;
    async fn get_route(&self, id: u64) -> Result<Route, HTTPError>;
    async fn create_route(&self, draft: &RouteDraft) -> Result<Route, HTTPError>;
    async fn update_route(&self, id: u64, draft: &RouteDraft) -> Result<Route, HTTPError>;
    async fn delete_route(&self, id: u64) -> Result<(), HTTPError>;
    async fn recommend_routes(
        &self,
        hub: &str,
        aircraft_id: Option<u64>,
    ) -> Result<Vec<RouteSuggestion>, HTTPError>;

    async fn recommend_configurations(
        &self,
        aircraft_id: u64,
        route_id: u64,
    ) -> Result<Vec<Configuration>, HTTPError>;
    async fn optimize_configuration(
        &self,
        aircraft_id: u64,
        route_id: u64,
    ) -> Result<Option<Configuration>, HTTPError>;
}

#[async_trait(?Send)]
impl AirlineService for HTTPClient {
    fn set_credential(&self, token: Option<String>) { HTTPClient::set_credential(self, token); }

    async fn register(&self, registration: &Registration) -> Result<(), HTTPError> {
        let resp = RegisterRequest { registration }.send_request(self).await?;
        event!("Register acknowledged: {}", resp.message());
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, HTTPError> {
        let resp = LoginRequest { email, password }.send_request(self).await?;
        // a 2xx without a token is still a refused login
        resp.into_grant().ok_or_else(|| {
            HTTPError::from(ResponseError::Unauthorized(ErrorBody::default()))
        })
    }

    async fn current_user(&self) -> Result<User, HTTPError> {
        Ok(CurrentUserRequest {}.send_request(self).await?.into_user())
    }

    async fn logout(&self) -> Result<(), HTTPError> {
        let resp = LogoutRequest {}.send_request(self).await?;
        event!("Logout acknowledged: {}", resp.message());
        Ok(())
    }

    async fn list_aircraft(&self) -> Result<Vec<Aircraft>, HTTPError> {
        Ok(AircraftListRequest {}.send_request(self).await?.into_aircraft())
    }

    async fn get_aircraft(&self, id: u64) -> Result<Aircraft, HTTPError> {
        Ok(AircraftDetailRequest { id }.send_request(self).await?.into_aircraft())
    }

    async fn filter_aircraft(&self, filter: &AircraftFilter) -> Result<Vec<Aircraft>, HTTPError> {
        Ok(AircraftFilterRequest { filter }.send_request(self).await?.into_aircraft())
    }

    async fn recommend_aircraft(&self, route_id: u64) -> Result<Vec<Aircraft>, HTTPError> {
        Ok(AircraftRecommendRequest { route_id }.send_request(self).await?.into_aircraft())
    }

    async fn list_routes(&self) -> Result<Vec<Route>, HTTPError> {
        Ok(RouteListRequest {}.send_request(self).await?.into_routes())
    }

    async fn get_route(&self, id: u64) -> Result<Route, HTTPError> {
        Ok(RouteDetailRequest { id }.send_request(self).await?.into_route())
    }

    async fn create_route(&self, draft: &RouteDraft) -> Result<Route, HTTPError> {
        Ok(RouteCreateRequest { draft }.send_request(self).await?.into_route())
    }

    async fn update_route(&self, id: u64, draft: &RouteDraft) -> Result<Route, HTTPError> {
        Ok(RouteUpdateRequest { id, draft }.send_request(self).await?.into_route())
    }

    async fn delete_route(&self, id: u64) -> Result<(), HTTPError> {
        let resp = RouteDeleteRequest { id }.send_request(self).await?;
        event!("Route {id} deleted: {}", resp.message());
        Ok(())
    }

    async fn recommend_routes(
        &self,
        hub: &str,
        aircraft_id: Option<u64>,
    ) -> Result<Vec<RouteSuggestion>, HTTPError> {
        let resp = RouteRecommendRequest { hub, aircraft_id }.send_request(self).await?;
        Ok(resp.into_suggestions())
    }

    async fn recommend_configurations(
        &self,
        aircraft_id: u64,
        route_id: u64,
    ) -> Result<Vec<Configuration>, HTTPError> {
        let resp = ConfigRecommendRequest { aircraft_id, route_id }.send_request(self).await?;
        Ok(resp.into_configurations())
    }

    async fn optimize_configuration(
        &self,
        aircraft_id: u64,
        route_id: u64,
    ) -> Result<Option<Configuration>, HTTPError> {
        let resp = ConfigOptimizeRequest { aircraft_id, route_id }.send_request(self).await?;
        Ok(resp.into_configuration())
    }
}
