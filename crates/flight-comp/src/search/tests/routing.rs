use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use super::common::*;
use crate::search::router::search_router;
use crate::search::service::FlightSearchService;

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn search_request() -> Request<Body> {
    post(
        "/api/v1/flights/search",
        serde_json::json!({ "flight_number": "BA123", "date": "2026-03-14" }),
    )
}

#[tokio::test]
async fn search_endpoint_returns_flight_and_verdict() {
    let app = router_with_record(flight("LHR", "CDG", Some(200)));

    let response = app.oneshot(search_request()).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["flight"]["departure"]["iata"], "LHR");
    assert_eq!(body["compensation"]["region"], "EU");
    assert_eq!(body["compensation"]["eligible"], true);
    assert_eq!(body["compensation"]["amount_eur"], 250);
}

#[tokio::test]
async fn search_endpoint_maps_not_found_to_user_message() {
    let service =
        FlightSearchService::new(Arc::new(FailingProvider::not_found()), eligibility_config(), reference());
    let app = search_router(Arc::new(service));

    let response = app.oneshot(search_request()).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json_body(response).await;
    assert_eq!(
        body["error"],
        "Unable to fetch flight information. Please check your flight number and try again."
    );
}

#[tokio::test]
async fn search_endpoint_maps_invalid_flight_number_to_unprocessable() {
    let service = FlightSearchService::new(
        Arc::new(FailingProvider::invalid_flight_number()),
        eligibility_config(),
        reference(),
    );
    let app = search_router(Arc::new(service));

    let response = app.oneshot(search_request()).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "'BA123' is not a valid flight number");
}

#[tokio::test]
async fn search_endpoint_maps_outage_to_bad_gateway() {
    let service = FlightSearchService::new(
        Arc::new(FailingProvider::unavailable()),
        eligibility_config(),
        reference(),
    );
    let app = search_router(Arc::new(service));

    let response = app.oneshot(search_request()).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn evaluate_endpoint_accepts_a_raw_record() {
    let app = router_with_record(flight("LHR", "CDG", Some(30)));
    let record = flight("JFK", "LAX", Some(300));

    let request = post(
        "/api/v1/compensation/evaluate",
        serde_json::to_value(&record).expect("record serializes"),
    );
    let response = app.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["region"], "Non-EU");
    assert_eq!(body["eligible"], false);
    assert_eq!(body["amount_eur"], 0);
    assert_eq!(body["delay_minutes"], 300);
    assert!(!body["rights"].as_array().expect("rights array").is_empty());
}
