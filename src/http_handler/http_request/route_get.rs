use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::routes::RouteDetailResponse;
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct RouteDetailRequest {
    pub(crate) id: u64,
}

impl NoBodyHTTPRequestType for RouteDetailRequest {}

impl HTTPRequestType for RouteDetailRequest {
    type Response = RouteDetailResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Owned(format!("/routes/{}", self.id)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
