use super::aircraft::RecommendedAircraftResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /aircraft/recommend endpoint.
#[derive(Debug)]
pub(crate) struct AircraftRecommendRequest {
    pub(crate) route_id: u64,
}

impl NoBodyHTTPRequestType for AircraftRecommendRequest {}

impl HTTPRequestType for AircraftRecommendRequest {
    type Response = RecommendedAircraftResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/aircraft/recommend") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("route_id", self.route_id.to_string())]
    }
}
