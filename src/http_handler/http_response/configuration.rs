use crate::http_handler::http_handler_common::Configuration;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /config/recommend endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct ConfigurationListResponse {
    #[serde(default)]
    configurations: Vec<Configuration>,
}

impl SerdeJSONBodyHTTPResponseType for ConfigurationListResponse {}

impl ConfigurationListResponse {
    pub(crate) fn into_configurations(self) -> Vec<Configuration> { self.configurations }
}

/// Response type for the /config/optimize endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct OptimizedConfigurationResponse {
    #[serde(default)]
    configuration: Option<Configuration>,
}

impl SerdeJSONBodyHTTPResponseType for OptimizedConfigurationResponse {}

impl OptimizedConfigurationResponse {
    pub(crate) fn into_configuration(self) -> Option<Configuration> { self.configuration }
}
