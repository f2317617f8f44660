use super::configuration::ConfigurationListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /config/recommend endpoint.
#[derive(Debug)]
pub(crate) struct ConfigRecommendRequest {
    pub(crate) aircraft_id: u64,
    pub(crate) route_id: u64,
}

impl NoBodyHTTPRequestType for ConfigRecommendRequest {}

impl HTTPRequestType for ConfigRecommendRequest {
    type Response = ConfigurationListResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/config/recommend") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("aircraft", self.aircraft_id.to_string()), ("route", self.route_id.to_string())]
    }
}
