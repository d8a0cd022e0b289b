//! End-to-end tests for the reservation HTTP API
//!
//! Requests are dispatched in-process through the full middleware stack,
//! without the network.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use reserva_server::{Config, ServerState, api};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.db");
    let config = Config::with_overrides(path.to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    let app = api::build_app(&state).with_state(state);
    (dir, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_reservation(holder: &str, date: &str, table: i64, party: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/reservaciones")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "tableNumber": table,
                "holderName": holder,
                "isActive": true,
                "date": date,
                "partySize": party,
                "services": "catering"
            })
            .to_string(),
        ))
        .unwrap()
}

fn put_reservation(id: i64, holder: &str, date: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/api/reservaciones/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "tableNumber": 7,
                "holderName": holder,
                "isActive": true,
                "date": date,
                "partySize": 3,
                "services": "mariachis"
            })
            .to_string(),
        ))
        .unwrap()
}

fn delete_date(date: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/api/reservaciones/fecha/{date}"))
        .body(Body::empty())
        .unwrap()
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, get("/api/reservaciones")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str::<Vec<Value>>(&body).unwrap()
}

#[tokio::test]
async fn create_list_and_serialization() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, post_reservation("Ana", "2024-06-01", 5, 4)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Reservación registrada exitosamente.");

    let all = list(&app).await;
    assert_eq!(all.len(), 1);
    let r = &all[0];
    assert!(r["id"].is_i64());
    assert_eq!(r["tableNumber"], 5);
    assert_eq!(r["holderName"], "Ana");
    assert_eq!(r["isActive"], true);
    assert_eq!(r["date"], "2024-06-01");
    assert_eq!(r["partySize"], 4);
    assert_eq!(r["services"], "catering");
}

#[tokio::test]
async fn reserve_delete_reserve_again() {
    let (_dir, app) = test_app().await;

    // Ana takes the date
    let (status, _) = send(&app, post_reservation("Ana", "2024-06-01", 5, 4)).await;
    assert_eq!(status, StatusCode::OK);

    // Luis is rejected for the same date
    let (status, body) = send(&app, post_reservation("Luis", "2024-06-01", 2, 2)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Ya existe una reservación para esa fecha.");

    // Freeing the date lets Luis in
    let (status, body) = send(&app, delete_date("2024-06-01")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Reservación eliminada exitosamente.");

    let (status, _) = send(&app, post_reservation("Luis", "2024-06-01", 2, 2)).await;
    assert_eq!(status, StatusCode::OK);

    let all = list(&app).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["holderName"], "Luis");
}

#[tokio::test]
async fn filter_by_holder_name() {
    let (_dir, app) = test_app().await;

    send(&app, post_reservation("Ana", "2024-06-01", 5, 4)).await;
    send(&app, post_reservation("Luis", "2024-06-02", 2, 2)).await;

    let (status, body) = send(&app, get("/api/reservaciones/nombre/Ana")).await;
    assert_eq!(status, StatusCode::OK);
    let found: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["holderName"], "Ana");

    let (status, body) = send(&app, get("/api/reservaciones/nombre/Pedro")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn update_with_same_date_is_rejected() {
    let (_dir, app) = test_app().await;

    send(&app, post_reservation("Ana", "2024-06-01", 5, 4)).await;
    let id = list(&app).await[0]["id"].as_i64().unwrap();

    let (status, body) = send(&app, put_reservation(id, "Ana", "2024-06-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Ya existe una reservación para la nueva fecha.");
}

#[tokio::test]
async fn update_to_a_free_date_keeps_stored_services() {
    let (_dir, app) = test_app().await;

    send(&app, post_reservation("Ana", "2024-06-01", 5, 4)).await;
    let id = list(&app).await[0]["id"].as_i64().unwrap();

    let (status, body) = send(&app, put_reservation(id, "Ana María", "2024-06-15")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Reservación actualizada exitosamente.");

    let all = list(&app).await;
    assert_eq!(all[0]["holderName"], "Ana María");
    assert_eq!(all[0]["date"], "2024-06-15");
    // The PUT body asked for "mariachis"; the stored value wins
    assert_eq!(all[0]["services"], "catering");
}

#[tokio::test]
async fn update_unknown_id_is_rejected() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, put_reservation(999, "Ana", "2024-06-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Reservación con ID 999 no encontrada.");
}

#[tokio::test]
async fn delete_unknown_date_is_rejected() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, delete_date("2024-06-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "No se encontró ninguna reservación para la fecha especificada.");
}

#[tokio::test]
async fn malformed_date_segment_is_rejected() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, delete_date("junio-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Fecha inválida: junio-1");
}

#[tokio::test]
async fn cors_preflight_reflects_the_configured_origin() {
    let (_dir, app) = test_app().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/reservaciones")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn health_reports_database_status() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"], "ok");
}
