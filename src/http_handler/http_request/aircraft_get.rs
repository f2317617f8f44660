use super::aircraft::AircraftDetailResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct AircraftDetailRequest {
    pub(crate) id: u64,
}

impl NoBodyHTTPRequestType for AircraftDetailRequest {}

impl HTTPRequestType for AircraftDetailRequest {
    type Response = AircraftDetailResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Owned(format!("/aircraft/{}", self.id)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
