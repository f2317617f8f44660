use crate::http_handler::http_handler_common::Aircraft;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /aircraft/ and /aircraft/filter endpoints.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct AircraftListResponse {
    #[serde(default)]
    aircraft: Vec<Aircraft>,
}

impl SerdeJSONBodyHTTPResponseType for AircraftListResponse {}

impl AircraftListResponse {
    pub(crate) fn into_aircraft(self) -> Vec<Aircraft> { self.aircraft }
}

/// Response type for the /aircraft/{id} endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct AircraftDetailResponse {
    aircraft: Aircraft,
}

impl SerdeJSONBodyHTTPResponseType for AircraftDetailResponse {}

impl AircraftDetailResponse {
    pub(crate) fn into_aircraft(self) -> Aircraft { self.aircraft }
}

/// Response type for the /aircraft/recommend endpoint, ranked best first.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct RecommendedAircraftResponse {
    #[serde(default)]
    recommended_aircraft: Vec<Aircraft>,
}

impl SerdeJSONBodyHTTPResponseType for RecommendedAircraftResponse {}

impl RecommendedAircraftResponse {
    pub(crate) fn into_aircraft(self) -> Vec<Aircraft> { self.recommended_aircraft }
}
