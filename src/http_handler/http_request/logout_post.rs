use super::auth::MessageResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /auth/logout endpoint.
#[derive(Debug)]
pub(crate) struct LogoutRequest {}

impl NoBodyHTTPRequestType for LogoutRequest {}

impl HTTPRequestType for LogoutRequest {
    type Response = MessageResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/auth/logout") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
