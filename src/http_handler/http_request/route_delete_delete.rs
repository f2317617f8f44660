use super::auth::MessageResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

#[derive(Debug)]
pub(crate) struct RouteDeleteRequest {
    pub(crate) id: u64,
}

impl NoBodyHTTPRequestType for RouteDeleteRequest {}

impl HTTPRequestType for RouteDeleteRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Owned(format!("/routes/{}", self.id)) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
