use super::auth::LoginResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /auth/login endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

impl JSONBodyHTTPRequestType for LoginRequest<'_> {
    type Body = Self;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest<'_> {
    type Response = LoginResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/auth/login") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
