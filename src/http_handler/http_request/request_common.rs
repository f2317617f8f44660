use super::super::http_client::HTTPClient;
use super::super::http_handler_common::HTTPError;
use super::response_common::{HTTPResponseType, ResponseError};
use std::borrow::Cow;
use strum_macros::Display;

/// The HTTP verbs used by the fleet service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Shared shape of every request sent to the fleet service.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Path of the endpoint relative to the client's base URL.
    fn endpoint(&self) -> Cow<'static, str>;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Query parameters appended to the URL; only set values are included.
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }

    fn request_url(&self, client: &HTTPClient) -> String {
        format!("{}{}", client.url(), self.endpoint())
    }

    /// Builds the authorized request without a body.
    fn get_request_base(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let mut builder =
            client.client().request(self.request_method().into(), self.request_url(client));
        let params = self.query_params();
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        client.authorize(builder)
    }
}

/// Requests without a body.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self.get_request_base(client).send().await.map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Requests carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self
            .get_request_base(client)
            .json(self.body())
            .send()
            .await
            .map_err(ResponseError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Errors raised before a request leaves the client.
#[derive(Debug, Display)]
pub enum RequestError {
    /// The underlying transport could not be constructed.
    ClientBuild(reqwest::Error),
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self { RequestError::ClientBuild(value) }
}
