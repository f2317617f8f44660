use crate::http_handler::HTTPError;
use strum_macros::Display;

/// The failures the session and view layer surfaces to its callers.
///
/// An empty result is never an error; it is a valid, empty view.
#[derive(Debug, Display)]
pub enum ConsoleError {
    /// Bad credentials or an expired/revoked token.
    #[strum(to_string = "authentication failed")]
    AuthenticationFailure(HTTPError),
    /// A required input was missing; the service was not contacted.
    #[strum(to_string = "validation failed")]
    ValidationFailure(ValidationFailure),
    /// The service could not be reached or answered with an error.
    #[strum(to_string = "service unavailable")]
    NetworkFailure(HTTPError),
}

/// What was missing when a request was refused before dispatch.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[strum(to_string = "select an aircraft and a route first")]
    MissingSelection,
    #[strum(to_string = "select a hub airport first")]
    MissingHub,
    #[strum(to_string = "email and password are required")]
    MissingCredentials,
    #[strum(to_string = "email, password, airline name and hub airport are required")]
    IncompleteRegistration,
    #[strum(to_string = "a session is already active, log out first")]
    AlreadyAuthenticated,
}

impl ConsoleError {
    pub fn is_validation(&self) -> bool { matches!(self, ConsoleError::ValidationFailure(_)) }
    pub fn is_authentication(&self) -> bool {
        matches!(self, ConsoleError::AuthenticationFailure(_))
    }
    pub fn is_network(&self) -> bool { matches!(self, ConsoleError::NetworkFailure(_)) }

    /// Human readable cause, including the service's message where it sent one.
    pub fn detail(&self) -> String {
        match self {
            ConsoleError::ValidationFailure(reason) => reason.to_string(),
            ConsoleError::AuthenticationFailure(err) | ConsoleError::NetworkFailure(err) => {
                match err {
                    HTTPError::HTTPResponseError(resp) => match resp.body() {
                        Some(body) if !body.message().is_empty() => {
                            format!("{resp}: {}", body.message())
                        }
                        _ => resp.to_string(),
                    },
                    HTTPError::HTTPRequestError(req) => req.to_string(),
                }
            }
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::AuthenticationFailure(err) | ConsoleError::NetworkFailure(err) => {
                Some(err)
            }
            ConsoleError::ValidationFailure(_) => None,
        }
    }
}

impl From<HTTPError> for ConsoleError {
    fn from(value: HTTPError) -> Self {
        if value.is_unauthorized() {
            ConsoleError::AuthenticationFailure(value)
        } else {
            ConsoleError::NetworkFailure(value)
        }
    }
}

impl From<ValidationFailure> for ConsoleError {
    fn from(value: ValidationFailure) -> Self { ConsoleError::ValidationFailure(value) }
}
