use super::auth::CurrentUserResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use std::borrow::Cow;

/// Request type for the /auth/user endpoint; identifies the user by the bearer credential.
#[derive(Debug)]
pub(crate) struct CurrentUserRequest {}

impl NoBodyHTTPRequestType for CurrentUserRequest {}

impl HTTPRequestType for CurrentUserRequest {
    type Response = CurrentUserResponse;
    fn endpoint(&self) -> Cow<'static, str> { Cow::Borrowed("/auth/user") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
