use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::api;
use crate::persistence::Database;
use crate::state::AppState;

/// Router backed by a lazily-connected pool. Input validation runs before
/// any query is issued, so the 400 paths below never touch a database.
fn setup_app() -> axum::Router {
    // Port 1 never hosts a real server; anything reaching the pool fails
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:1/lot_test")
        .expect("lazy pool");
    let state = Arc::new(AppState::new(Database::from_pool(pool)));
    api::routes().with_state(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn start_flight_rejects_missing_ids() {
    let app = setup_app();

    // Each payload is missing at least one of the four required ids
    let payloads = [
        json!({}),
        json!({ "id_operatora": 1 }),
        json!({ "id_operatora": 1, "id_drona": 2, "id_trasy": 3 }),
        json!({ "id_drona": 2, "id_trasy": 3, "id_typ": 4 }),
    ];

    for payload in payloads {
        let response = app
            .clone()
            .oneshot(post_json("/api/lot/start", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Brak wymaganych pól"));
    }
}

#[tokio::test]
async fn telemetry_rejects_missing_coordinates() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/lot/1/telemetria", json!({ "wysokosc_m": 80.0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Brak lat/lon");
}

#[tokio::test]
async fn telemetry_rejects_latitude_out_of_range() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/lot/1/telemetria",
            json!({ "lat": 123.456, "lon": 21.0122 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Nieprawidłowe lat/lon");
}

#[tokio::test]
async fn telemetry_rejects_longitude_out_of_range() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/lot/1/telemetria",
            json!({ "lat": 52.2297, "lon": -200.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn telemetry_accepts_boundary_coordinates_past_validation() {
    let app = setup_app();

    // Boundary values pass validation; the request then fails on the
    // unreachable test database, which must surface as a 500, not a 400.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/lot/1/telemetria",
            json!({ "lat": 90.0, "lon": -180.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_operator_rejects_malformed_birth_date() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/operator",
            json!({
                "imie": "Jan",
                "nazwisko": "Kowalski",
                "data_urodzenia": "01.05.1990"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("data_urodzenia"));
}
