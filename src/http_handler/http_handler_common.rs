use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// A numeric figure the service may or may not have evaluated yet
/// (estimated profit, flight time, ...).
///
/// Decodes from a nullable JSON number; a missing or `null` value is `Unknown`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Estimate {
    Known(f64),
    #[default]
    Unknown,
}

impl Estimate {
    pub fn known(self) -> Option<f64> {
        match self {
            Estimate::Known(val) => Some(val),
            Estimate::Unknown => None,
        }
    }

    /// Folds `Unknown` to zero, used for totals.
    pub fn or_zero(self) -> f64 { self.known().unwrap_or(0.0) }
}

impl From<Option<f64>> for Estimate {
    fn from(value: Option<f64>) -> Self { value.map_or(Estimate::Unknown, Estimate::Known) }
}

impl From<Estimate> for Option<f64> {
    fn from(value: Estimate) -> Self { value.known() }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Airline {
    name: String,
    hub_airport_code: String,
    #[serde(default)]
    balance: f64,
}

impl Airline {
    pub fn name(&self) -> &str { &self.name }
    pub fn hub_airport_code(&self) -> &str { &self.hub_airport_code }
    pub fn balance(&self) -> f64 { self.balance }
}

/// The `{id, email}` pair the auth endpoints return for a user.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct UserIdentity {
    id: String,
    email: String,
}

/// An authenticated user together with the snapshot of the airline it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: String,
    email: String,
    airline: Option<Airline>,
}

impl User {
    pub fn new(identity: UserIdentity, airline: Option<Airline>) -> Self {
        Self { id: identity.id, email: identity.email, airline }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn email(&self) -> &str { &self.email }
    pub fn airline(&self) -> Option<&Airline> { self.airline.as_ref() }
    pub fn hub_airport_code(&self) -> Option<&str> {
        self.airline.as_ref().map(Airline::hub_airport_code)
    }
}

/// The result of a successful login: the credential token and the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginGrant {
    pub token: String,
    pub user: User,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Aircraft {
    id: u64,
    manufacturer: String,
    model: String,
    range_km: u32,
    speed_kmh: u32,
    #[serde(default)]
    capacity_eco: u32,
    #[serde(default)]
    capacity_business: u32,
    #[serde(default)]
    capacity_first: u32,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    category: Option<String>,
    /// Only filled in by the aircraft recommendation endpoint.
    #[serde(default)]
    estimated_profit: Estimate,
}

impl Aircraft {
    pub fn id(&self) -> u64 { self.id }
    pub fn manufacturer(&self) -> &str { &self.manufacturer }
    pub fn model(&self) -> &str { &self.model }
    pub fn range_km(&self) -> u32 { self.range_km }
    pub fn speed_kmh(&self) -> u32 { self.speed_kmh }
    pub fn capacity_eco(&self) -> u32 { self.capacity_eco }
    pub fn capacity_business(&self) -> u32 { self.capacity_business }
    pub fn capacity_first(&self) -> u32 { self.capacity_first }
    pub fn price(&self) -> f64 { self.price }
    pub fn category(&self) -> Option<&str> { self.category.as_deref() }
    pub fn estimated_profit(&self) -> Estimate { self.estimated_profit }

    /// Seats over all three cabin classes of the out-of-the-box layout.
    pub fn total_capacity(&self) -> u32 {
        self.capacity_eco + self.capacity_business + self.capacity_first
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    id: u64,
    origin_airport_code: String,
    destination_airport_code: String,
    #[serde(default)]
    destination_city: Option<String>,
    #[serde(default)]
    destination_country: Option<String>,
    distance_km: f64,
    #[serde(default)]
    flight_time_hours: Estimate,
    #[serde(default)]
    demand_economy: u32,
    #[serde(default)]
    demand_business: u32,
    #[serde(default)]
    demand_first: u32,
    #[serde(default)]
    estimated_profit: Estimate,
}

impl Route {
    pub fn id(&self) -> u64 { self.id }
    pub fn origin_airport_code(&self) -> &str { &self.origin_airport_code }
    pub fn destination_airport_code(&self) -> &str { &self.destination_airport_code }
    pub fn destination_city(&self) -> Option<&str> { self.destination_city.as_deref() }
    pub fn destination_country(&self) -> Option<&str> { self.destination_country.as_deref() }
    pub fn distance_km(&self) -> f64 { self.distance_km }
    pub fn flight_time_hours(&self) -> Estimate { self.flight_time_hours }
    pub fn demand_economy(&self) -> u32 { self.demand_economy }
    pub fn demand_business(&self) -> u32 { self.demand_business }
    pub fn demand_first(&self) -> u32 { self.demand_first }
    pub fn estimated_profit(&self) -> Estimate { self.estimated_profit }
}

/// A route the service proposes from a hub. It is not an operated route yet
/// and carries no id; rows are told apart by their position.
///
/// Profit and flight time are only evaluated when the proposal was
/// made for a specific aircraft.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSuggestion {
    origin_airport_code: String,
    destination_airport_code: String,
    #[serde(default)]
    destination_name: Option<String>,
    #[serde(default)]
    destination_city: Option<String>,
    #[serde(default)]
    destination_country: Option<String>,
    distance_km: f64,
    #[serde(default)]
    demand_economy: u32,
    #[serde(default)]
    demand_business: u32,
    #[serde(default)]
    demand_first: u32,
    #[serde(default)]
    demand_cargo: u32,
    #[serde(default)]
    flight_time_hours: Estimate,
    #[serde(default)]
    estimated_profit: Estimate,
}

impl RouteSuggestion {
    pub fn origin_airport_code(&self) -> &str { &self.origin_airport_code }
    pub fn destination_airport_code(&self) -> &str { &self.destination_airport_code }
    pub fn destination_name(&self) -> Option<&str> { self.destination_name.as_deref() }
    pub fn destination_city(&self) -> Option<&str> { self.destination_city.as_deref() }
    pub fn destination_country(&self) -> Option<&str> { self.destination_country.as_deref() }
    pub fn distance_km(&self) -> f64 { self.distance_km }
    pub fn demand_economy(&self) -> u32 { self.demand_economy }
    pub fn demand_business(&self) -> u32 { self.demand_business }
    pub fn demand_first(&self) -> u32 { self.demand_first }
    pub fn demand_cargo(&self) -> u32 { self.demand_cargo }
    pub fn flight_time_hours(&self) -> Estimate { self.flight_time_hours }
    pub fn estimated_profit(&self) -> Estimate { self.estimated_profit }
}

/// A cabin layout candidate as evaluated by the service.
///
/// The service keeps the seat counts within the aircraft's total capacity; the
/// client never re-derives them.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    eco: u32,
    business: u32,
    first: u32,
    #[serde(default)]
    eco_load: f64,
    #[serde(default)]
    business_load: f64,
    #[serde(default)]
    first_load: f64,
    #[serde(default)]
    total_revenue: f64,
    #[serde(default)]
    total_cost: f64,
    #[serde(default)]
    profit: f64,
    #[serde(default)]
    overall_load: f64,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    is_default: Option<bool>,
    #[serde(default)]
    name: Option<String>,
}

impl Configuration {
    pub fn eco(&self) -> u32 { self.eco }
    pub fn business(&self) -> u32 { self.business }
    pub fn first(&self) -> u32 { self.first }
    pub fn eco_load(&self) -> f64 { self.eco_load }
    pub fn business_load(&self) -> f64 { self.business_load }
    pub fn first_load(&self) -> f64 { self.first_load }
    pub fn total_revenue(&self) -> f64 { self.total_revenue }
    pub fn total_cost(&self) -> f64 { self.total_cost }
    pub fn profit(&self) -> f64 { self.profit }
    pub fn overall_load(&self) -> f64 { self.overall_load }
    pub fn rank(&self) -> Option<u32> { self.rank }
    pub fn is_default(&self) -> bool { self.is_default.unwrap_or(false) }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
}

/// Aircraft filter criteria. Empty strings and `None` are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftFilter {
    pub manufacturer: String,
    pub category: String,
    pub min_range: Option<u32>,
    pub max_range: Option<u32>,
    pub aircraft_type: String,
}

impl AircraftFilter {
    /// Returns `true` if no criterion is set.
    pub fn is_empty(&self) -> bool { self.sparse_params().is_empty() }

    /// The set criteria as query parameters, in a fixed order.
    ///
    /// `min_range > max_range` is passed through as given.
    pub fn sparse_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.manufacturer.trim().is_empty() {
            params.push(("manufacturer", self.manufacturer.trim().to_string()));
        }
        if !self.category.trim().is_empty() {
            params.push(("category", self.category.trim().to_string()));
        }
        if let Some(min) = self.min_range {
            params.push(("min_range", min.to_string()));
        }
        if let Some(max) = self.max_range {
            params.push(("max_range", max.to_string()));
        }
        if !self.aircraft_type.trim().is_empty() {
            params.push(("type", self.aircraft_type.trim().to_string()));
        }
        params
    }
}

/// Body of the route create/update endpoints.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteDraft {
    pub origin_airport_code: String,
    pub destination_airport_code: String,
}

/// Body of the register endpoint.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub airline_name: String,
    pub hub_airport_code: String,
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl HTTPError {
    /// Returns `true` if the service rejected the held credential or the submitted ones.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, HTTPError::HTTPResponseError(ResponseError::Unauthorized(_)))
    }
}

#[cfg(test)]
impl Airline {
    pub(crate) fn test(name: &str, hub: &str) -> Self {
        Self { name: name.to_string(), hub_airport_code: hub.to_string(), balance: 1_000_000.0 }
    }
}

#[cfg(test)]
impl User {
    pub(crate) fn test(id: &str, email: &str, hub: &str) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            airline: Some(Airline::test("Test Airline", hub)),
        }
    }
}

#[cfg(test)]
impl Aircraft {
    pub(crate) fn test(id: u64, manufacturer: &str, model: &str) -> Self {
        Self {
            id,
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            range_km: 5000,
            speed_kmh: 850,
            capacity_eco: 160,
            capacity_business: 16,
            capacity_first: 0,
            price: 80_000_000.0,
            category: Some("midhaul".to_string()),
            estimated_profit: Estimate::Unknown,
        }
    }
}

#[cfg(test)]
impl Route {
    pub(crate) fn test(id: u64, estimated_profit: Option<f64>) -> Self {
        Self {
            id,
            origin_airport_code: "JFK".to_string(),
            destination_airport_code: "LAX".to_string(),
            destination_city: Some("Los Angeles".to_string()),
            destination_country: Some("United States".to_string()),
            distance_km: 4000.0,
            flight_time_hours: Estimate::Known(4.7),
            demand_economy: 200,
            demand_business: 50,
            demand_first: 20,
            estimated_profit: estimated_profit.into(),
        }
    }

    pub(crate) fn retarget(&mut self, draft: &RouteDraft) {
        self.origin_airport_code.clone_from(&draft.origin_airport_code);
        self.destination_airport_code.clone_from(&draft.destination_airport_code);
    }
}

#[cfg(test)]
impl RouteSuggestion {
    pub(crate) fn test(destination: &str, estimated_profit: Option<f64>) -> Self {
        Self {
            origin_airport_code: "JFK".to_string(),
            destination_airport_code: destination.to_string(),
            destination_name: None,
            destination_city: None,
            destination_country: None,
            distance_km: 5540.0,
            demand_economy: 120,
            demand_business: 24,
            demand_first: 6,
            demand_cargo: 12,
            flight_time_hours: Estimate::Unknown,
            estimated_profit: estimated_profit.into(),
        }
    }
}

#[cfg(test)]
impl Configuration {
    pub(crate) fn test(rank: Option<u32>, is_default: bool, profit: f64) -> Self {
        Self {
            eco: 150,
            business: 20,
            first: 6,
            eco_load: 90.0,
            business_load: 75.0,
            first_load: 50.0,
            total_revenue: profit + 40_000.0,
            total_cost: 40_000.0,
            profit,
            overall_load: 85.5,
            rank,
            is_default: Some(is_default),
            name: None,
        }
    }

    pub(crate) fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
