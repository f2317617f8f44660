use crate::http_handler::http_handler_common::{Route, RouteSuggestion};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /routes/ endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct RouteListResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

impl SerdeJSONBodyHTTPResponseType for RouteListResponse {}

impl RouteListResponse {
    pub(crate) fn into_routes(self) -> Vec<Route> { self.routes }
}

/// Response type for the single-route endpoints (get, create, update).
#[derive(serde::Deserialize, Debug)]
pub(crate) struct RouteDetailResponse {
    route: Route,
}

impl SerdeJSONBodyHTTPResponseType for RouteDetailResponse {}

impl RouteDetailResponse {
    pub(crate) fn into_route(self) -> Route { self.route }
}

/// Response type for the /routes/recommend endpoint, ranked best first.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct RecommendedRoutesResponse {
    #[serde(default)]
    recommended_routes: Vec<RouteSuggestion>,
}

impl SerdeJSONBodyHTTPResponseType for RecommendedRoutesResponse {}

impl RecommendedRoutesResponse {
    pub(crate) fn into_suggestions(self) -> Vec<RouteSuggestion> { self.recommended_routes }
}
