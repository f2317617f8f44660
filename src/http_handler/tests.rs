use super::http_response::response_common::ResponseError;
use super::{AircraftFilter, AirlineService, Estimate, HTTPClient, HTTPError, Registration};
use crate::error::ConsoleError;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::time::Duration;

const AIRCRAFT_BODY: &str = r#"{"aircraft": [
    {"id": 1, "manufacturer": "Boeing", "model": "737-800", "range_km": 5765, "speed_kmh": 842,
     "capacity_eco": 162, "capacity_business": 12, "capacity_first": 0, "price": 89100000.0,
     "category": "midhaul"}
]}"#;

fn client_for(server: &ServerGuard) -> HTTPClient {
    HTTPClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_no_bearer_header_without_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/aircraft/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AIRCRAFT_BODY)
        .create_async()
        .await;
    let client = client_for(&server);

    let aircraft = client.list_aircraft().await.unwrap();
    assert_eq!(aircraft.len(), 1);
    assert_eq!(aircraft[0].total_capacity(), 174);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_header_once_token_held() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/auth/user")
        .match_header("authorization", "Bearer tok-42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "user": {"id": "u1", "email": "ops@example.com"},
                "airline": {"name": "Sky", "hub_airport_code": "JFK", "balance": 5.0e7}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);
    AirlineService::set_credential(&client, Some("tok-42".to_string()));
    assert!(client.has_credential());

    let user = client.current_user().await.unwrap();
    assert_eq!(user.email(), "ops@example.com");
    assert_eq!(user.hub_airport_code(), Some("JFK"));
    mock.assert_async().await;

    client.set_credential(None);
    assert!(!client.has_credential());
}

#[tokio::test]
async fn test_filter_sends_only_set_criteria() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/aircraft/filter")
        .match_query(Matcher::Exact("manufacturer=Boeing&min_range=3000".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AIRCRAFT_BODY)
        .create_async()
        .await;
    let client = client_for(&server);
    let filter = AircraftFilter {
        manufacturer: "Boeing".to_string(),
        min_range: Some(3000),
        category: "  ".to_string(),
        ..AircraftFilter::default()
    };

    let aircraft = client.filter_aircraft(&filter).await.unwrap();
    assert_eq!(aircraft[0].manufacturer(), "Boeing");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({"email": "ops@example.com", "password": "pw"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "jwt-token",
                "user": {"id": "7", "email": "ops@example.com"},
                "airline": {"name": "Sky", "hub_airport_code": "LHR", "balance": 1.0}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);

    let grant = client.login("ops@example.com", "pw").await.unwrap();
    assert_eq!(grant.token, "jwt-token");
    assert_eq!(grant.user.id(), "7");
    assert_eq!(grant.user.airline().map(|a| a.name()), Some("Sky"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_without_token_is_refused() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"user": {"id": "7", "email": "ops@example.com"}}"#)
        .create_async()
        .await;
    let client = client_for(&server);

    let err = client.login("ops@example.com", "pw").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid_credentials", "message": "Invalid email or password"}"#)
        .create_async()
        .await;
    let client = client_for(&server);

    let err = client.login("ops@example.com", "wrong").await.unwrap_err();
    match &err {
        HTTPError::HTTPResponseError(ResponseError::Unauthorized(body)) => {
            assert_eq!(body.error(), "invalid_credentials");
            assert_eq!(body.message(), "Invalid email or password");
        }
        other => panic!("unexpected error {other:?}"),
    }
    let console_err = ConsoleError::from(err);
    assert!(console_err.is_authentication());
    assert!(console_err.detail().contains("Invalid email or password"));
}

#[tokio::test]
async fn test_server_error_maps_to_network_failure() {
    let mut server = Server::new_async().await;
    server.mock("GET", "/routes/").with_status(500).create_async().await;
    let client = client_for(&server);

    let err = client.list_routes().await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPResponseError(ResponseError::InternalServer(_))));
    assert!(ConsoleError::from(err).is_network());
}

#[tokio::test]
async fn test_bad_request_carries_error_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/register")
        .match_body(Matcher::PartialJson(json!({"airline_name": "Sky", "hub_airport_code": "JFK"})))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "exists", "message": "Email already registered"}"#)
        .create_async()
        .await;
    let client = client_for(&server);
    let registration = Registration {
        email: "ops@example.com".to_string(),
        password: "pw".to_string(),
        airline_name: "Sky".to_string(),
        hub_airport_code: "JFK".to_string(),
    };

    let err = client.register(&registration).await.unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::BadRequest(body)) => {
            assert_eq!(body.message(), "Email already registered");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_collection_key_is_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/routes/recommend")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("hub".to_string(), "JFK".to_string()),
            Matcher::UrlEncoded("aircraft".to_string(), "3".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;
    let client = client_for(&server);

    let routes = client.recommend_routes("JFK", Some(3)).await.unwrap();
    assert!(routes.is_empty());
}

#[tokio::test]
async fn test_recommended_routes_without_ids() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/routes/recommend")
        .match_query(Matcher::UrlEncoded("hub".to_string(), "JFK".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "hub": {"code": "JFK", "name": "John F. Kennedy International"},
                "aircraft": null,
                "recommended_routes": [
                    {"origin_airport_code": "JFK", "destination_airport_code": "LHR",
                     "destination_name": "Heathrow", "destination_city": "London",
                     "destination_country": "United Kingdom", "distance_km": 5540,
                     "demand_economy": 120, "demand_business": 24, "demand_first": 6,
                     "demand_cargo": 12},
                    {"origin_airport_code": "JFK", "destination_airport_code": "CDG",
                     "destination_city": "Paris", "distance_km": 5837,
                     "demand_economy": 110, "demand_business": 22, "demand_first": 5,
                     "demand_cargo": 11, "estimated_profit": 8400.5, "flight_time_hours": 6.9}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);

    let suggestions = client.recommend_routes("JFK", None).await.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].destination_airport_code(), "LHR");
    assert_eq!(suggestions[0].destination_city(), Some("London"));
    assert_eq!(suggestions[0].demand_cargo(), 12);
    assert_eq!(suggestions[0].estimated_profit(), Estimate::Unknown);
    assert_eq!(suggestions[1].estimated_profit(), Estimate::Known(8400.5));
    assert_eq!(suggestions[1].flight_time_hours(), Estimate::Known(6.9));
}

#[tokio::test]
async fn test_route_profit_decodes_as_estimate() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/routes/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"routes": [
                {"id": 1, "origin_airport_code": "JFK", "destination_airport_code": "LAX",
                 "distance_km": 3983.0, "estimated_profit": 12500.5},
                {"id": 2, "origin_airport_code": "JFK", "destination_airport_code": "SFO",
                 "distance_km": 4152.0, "estimated_profit": null}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);

    let routes = client.list_routes().await.unwrap();
    assert_eq!(routes[0].estimated_profit(), Estimate::Known(12500.5));
    assert_eq!(routes[1].estimated_profit(), Estimate::Unknown);
    assert_eq!(routes[1].flight_time_hours(), Estimate::Unknown);
}

#[tokio::test]
async fn test_optimize_posts_selection() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/config/optimize")
        .match_body(Matcher::Json(json!({"aircraft_id": 4, "route_id": 9})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"configuration": {
                "eco": 120, "business": 24, "first": 8, "profit": 31000.0, "overall_load": 88.2
            }})
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);

    let config = client.optimize_configuration(4, 9).await.unwrap().unwrap();
    assert_eq!((config.eco(), config.business(), config.first()), (120, 24, 8));
    assert!(!config.is_default());
    assert_eq!(config.rank(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_recommend_configurations_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/config/recommend")
        .match_query(Matcher::Exact("aircraft=4&route=9".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"configurations": [
                {"eco": 150, "business": 20, "first": 0, "rank": 1, "name": "High density"},
                {"eco": 162, "business": 12, "first": 0, "rank": 2, "is_default": true}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let client = client_for(&server);

    let configs = client.recommend_configurations(4, 9).await.unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].name(), Some("High density"));
    assert!(configs[1].is_default());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    let client = HTTPClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = client.list_aircraft().await.unwrap_err();
    assert!(!err.is_unauthorized());
    assert!(ConsoleError::from(err).is_network());
}
