pub(crate) mod response_common;
pub mod auth;
pub mod aircraft;
pub mod routes;
pub mod configuration;
