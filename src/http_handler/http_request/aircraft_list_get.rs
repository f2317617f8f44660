use super::aircraft::AircraftListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct AircraftListRequest {}

impl NoBodyHTTPRequestType for AircraftListRequest {}

impl HTTPRequestType for AircraftListRequest {
    type Response = AircraftListResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/aircraft/") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
