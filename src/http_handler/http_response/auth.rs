use crate::http_handler::http_handler_common::{Airline, LoginGrant, User, UserIdentity};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /auth/login endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct LoginResponse {
    /// The credential token; absent if the service did not open a session.
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserIdentity>,
    #[serde(default)]
    airline: Option<Airline>,
}

impl SerdeJSONBodyHTTPResponseType for LoginResponse {}

impl LoginResponse {
    /// Pairs the token with its user; `None` unless both are present.
    pub(crate) fn into_grant(self) -> Option<LoginGrant> {
        match (self.token, self.user) {
            (Some(token), Some(identity)) if !token.is_empty() => {
                Some(LoginGrant { token, user: User::new(identity, self.airline) })
            }
            _ => None,
        }
    }
}

/// Response type for the /auth/user endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct CurrentUserResponse {
    user: UserIdentity,
    #[serde(default)]
    airline: Option<Airline>,
}

impl SerdeJSONBodyHTTPResponseType for CurrentUserResponse {}

impl CurrentUserResponse {
    pub(crate) fn into_user(self) -> User { User::new(self.user, self.airline) }
}

/// Plain acknowledgement returned by register, logout and delete endpoints.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for MessageResponse {}

impl MessageResponse {
    pub(crate) fn message(&self) -> &str { &self.message }
}
