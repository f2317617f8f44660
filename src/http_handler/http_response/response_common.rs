use reqwest::StatusCode;
use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for responses that are plain `serde` envelopes around their payload.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Maps non-success status codes onto [`ResponseError`] variants.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(ResponseError::Unauthorized(ErrorBody::read(response).await))
        } else if status == StatusCode::NOT_FOUND {
            Err(ResponseError::NotFound(ErrorBody::read(response).await))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(ErrorBody::read(response).await))
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(ErrorBody::read(response).await))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// The `{error, message}` body the service attaches to failed requests.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

impl ErrorBody {
    /// Reads the error body, tolerating empty or non-JSON payloads.
    async fn read(response: reqwest::Response) -> Self {
        response.json::<ErrorBody>().await.unwrap_or_default()
    }

    pub fn error(&self) -> &str { &self.error }
    pub fn message(&self) -> &str { &self.message }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    Unauthorized(ErrorBody),
    NotFound(ErrorBody),
    BadRequest(ErrorBody),
    InternalServer(ErrorBody),
    NoConnection,
    Timeout,
    MalformedBody,
    Unknown,
}

impl ResponseError {
    /// The service-provided error body, if the failure came with one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ResponseError::Unauthorized(body)
            | ResponseError::NotFound(body)
            | ResponseError::BadRequest(body)
            | ResponseError::InternalServer(body) => Some(body),
            _ => None,
        }
    }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() || value.is_request() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::MalformedBody
        } else {
            ResponseError::Unknown
        }
    }
}
