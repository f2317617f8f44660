use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::routes::RouteListResponse;
use std::borrow::Cow;

/// Request type for the /routes/ endpoint, listing the routes of the signed-in airline.
#[derive(Debug)]
pub(crate) struct RouteListRequest {}

impl NoBodyHTTPRequestType for RouteListRequest {}

impl HTTPRequestType for RouteListRequest {
    type Response = RouteListResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/routes/") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
