use super::configuration::OptimizedConfigurationResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /config/optimize endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct ConfigOptimizeRequest {
    pub(crate) aircraft_id: u64,
    pub(crate) route_id: u64,
}

impl JSONBodyHTTPRequestType for ConfigOptimizeRequest {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for ConfigOptimizeRequest {
    type Response = OptimizedConfigurationResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/config/optimize") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
