pub mod airline_service;
pub mod http_client;
pub mod http_handler_common;
pub mod http_request;
pub mod http_response;

#[cfg(test)]
pub(crate) mod mock_service;
#[cfg(test)]
mod tests;

pub(crate) use airline_service::AirlineService;
pub(crate) use http_client::HTTPClient;
pub use http_handler_common::{
    Aircraft, AircraftFilter, Configuration, Estimate, HTTPError, Registration, Route, RouteDraft,
    RouteSuggestion, User,
};
