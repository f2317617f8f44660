use super::auth::MessageResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_handler_common::Registration;
use std::borrow::Cow;

/// Request type for the /auth/register endpoint.
#[derive(Debug)]
pub(crate) struct RegisterRequest<'a> {
    pub(crate) registration: &'a Registration,
}

impl JSONBodyHTTPRequestType for RegisterRequest<'_> {
    type Body = Registration;
    fn body(&self) -> &Self::Body { self.registration }
}

impl HTTPRequestType for RegisterRequest<'_> {
    type Response = MessageResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/auth/register") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
