use super::aircraft::AircraftListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::AircraftFilter;
use std::borrow::Cow;

/// Request type for the /aircraft/filter endpoint.
///
/// Only the criteria that are actually set end up in the query string.
#[derive(Debug)]
pub(crate) struct AircraftFilterRequest<'a> {
    pub(crate) filter: &'a AircraftFilter,
}

impl NoBodyHTTPRequestType for AircraftFilterRequest<'_> {}

impl HTTPRequestType for AircraftFilterRequest<'_> {
    type Response = AircraftListResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/aircraft/filter") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> { self.filter.sparse_params() }
}
