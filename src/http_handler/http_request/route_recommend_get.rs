use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::routes::RecommendedRoutesResponse;
use std::borrow::Cow;

/// Request type for the /routes/recommend endpoint.
#[derive(Debug)]
pub(crate) struct RouteRecommendRequest<'a> {
    /// Airport code the recommended routes start from.
    pub(crate) hub: &'a str,
    /// Restricts the recommendation to routes this aircraft can serve.
    pub(crate) aircraft_id: Option<u64>,
}

impl NoBodyHTTPRequestType for RouteRecommendRequest<'_> {}

impl HTTPRequestType for RouteRecommendRequest<'_> {
    type Response = RecommendedRoutesResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/routes/recommend") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("hub", self.hub.to_string())];
        if let Some(id) = self.aircraft_id {
            params.push(("aircraft", id.to_string()));
        }
        params
    }
}
