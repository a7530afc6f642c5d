//! End-to-end API tests.
//!
//! Run with: cargo test --test api_test -- --ignored
//!
//! Note: Requires a running server at http://localhost:3000 backed by a
//! PostGIS database seeded with at least one operator, drone instance,
//! route (with waypoints) and flight type, all with id 1.
//! Set LOT_TEST_URL to point elsewhere.

use reqwest::Client;
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("LOT_TEST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

async fn start_flight(client: &Client, base: &str) -> i64 {
    let resp = client
        .post(format!("{}/api/lot/start", base))
        .json(&json!({
            "id_operatora": 1,
            "id_drona": 1,
            "id_trasy": 1,
            "id_typ": 1
        }))
        .send()
        .await
        .expect("start flight");
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Rozpoczęty");
    body["id_lotu"].as_i64().expect("id_lotu")
}

#[tokio::test]
#[ignore] // Run only when server is running
async fn flight_lifecycle_rejects_double_finish() {
    let client = Client::new();
    let base = base_url();

    let id = start_flight(&client, &base).await;

    let resp = client
        .post(format!("{}/api/lot/{}/finish", base, id))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Zakończony");
    assert!(!body["czas_konca"].is_null());

    // Second finish must 404: the conditional UPDATE matches nothing
    let resp = client
        .post(format!("{}/api/lot/{}/finish", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    // So must an abort on the closed flight
    let resp = client
        .post(format!("{}/api/lot/{}/abort", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn aborted_flight_gets_terminal_status() {
    let client = Client::new();
    let base = base_url();

    let id = start_flight(&client, &base).await;

    let resp = client
        .post(format!("{}/api/lot/{}/abort", base, id))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Przerwany");
}

#[tokio::test]
#[ignore]
async fn telemetry_for_unknown_flight_is_404() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/lot/999999/telemetria", base))
        .json(&json!({ "lat": 52.2297, "lon": 21.0122, "wysokosc_m": 80.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn telemetry_roundtrip_preserves_client_timestamp() {
    let client = Client::new();
    let base = base_url();

    let id = start_flight(&client, &base).await;

    let czas_ms: i64 = 1_700_000_000_000;
    let resp = client
        .post(format!("{}/api/lot/{}/telemetria", base, id))
        .json(&json!({
            "lat": 52.2297,
            "lon": 21.0122,
            "wysokosc_m": 80.0,
            "czas_ms": czas_ms,
            "predkosc_m_s": 12.5,
            "bateria_pro": 87.0,
            "sila_sygnalu": "dobra"
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let inserted: Value = resp.json().await.unwrap();
    assert_eq!(inserted["czas"], "2023-11-14T22:13:20");

    let resp = client
        .get(format!("{}/api/lot/{}/telemetria", base, id))
        .send()
        .await
        .unwrap();
    let points: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(points.len(), 1);
    assert!((points[0]["lat"].as_f64().unwrap() - 52.2297).abs() < 1e-9);
    assert!((points[0]["lon"].as_f64().unwrap() - 21.0122).abs() < 1e-9);
}

#[tokio::test]
#[ignore]
async fn telemetry_without_client_timestamp_is_stamped_by_database() {
    let client = Client::new();
    let base = base_url();

    let id = start_flight(&client, &base).await;

    let resp = client
        .post(format!("{}/api/lot/{}/telemetria", base, id))
        .json(&json!({ "lat": 52.2297, "lon": 21.0122 }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let inserted: Value = resp.json().await.unwrap();
    // The database clock fills czas, so the row never comes back unstamped
    assert!(inserted["czas"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
#[ignore]
async fn flights_listed_newest_start_first() {
    let client = Client::new();
    let base = base_url();

    let first = start_flight(&client, &base).await;
    let second = start_flight(&client, &base).await;

    let resp = client
        .get(format!("{}/api/lot", base))
        .send()
        .await
        .unwrap();
    let flights: Vec<Value> = resp.json().await.unwrap();

    let pos = |id: i64| {
        flights
            .iter()
            .position(|f| f["id_lotu"].as_i64() == Some(id))
            .expect("flight listed")
    };
    assert!(pos(second) < pos(first));

    let starts: Vec<&str> = flights
        .iter()
        .filter_map(|f| f["czas_startu"].as_str())
        .collect();
    let mut sorted = starts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(starts, sorted);
}

#[tokio::test]
#[ignore]
async fn route_points_ordered_by_sequence() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{}/api/route/1/points", base))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let points: Vec<Value> = resp.json().await.unwrap();
    let order: Vec<i64> = points
        .iter()
        .map(|p| p["kolejnosc"].as_i64().unwrap())
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[tokio::test]
#[ignore]
async fn operator_create_stores_optional_birth_date() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .post(format!("{}/api/operator", base))
        .json(&json!({
            "imie": "Anna",
            "nazwisko": "Nowak",
            "data_urodzenia": "1990-05-01",
            "obywatelstwo": "PL",
            "e_mail": "anna.nowak@example.com",
            "status": "aktywny"
        }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["data_urodzenia"], "1990-05-01");
    assert!(!created["utworzono"].is_null());

    let resp = client
        .post(format!("{}/api/operator", base))
        .json(&json!({ "imie": "Piotr", "nazwisko": "Wiśniewski" }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let created: Value = resp.json().await.unwrap();
    assert!(created["data_urodzenia"].is_null());
}

#[tokio::test]
#[ignore]
async fn operator_columns_flags_identity_column() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{}/api/operator/columns", base))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let columns: Vec<Value> = resp.json().await.unwrap();
    let id_column = columns
        .iter()
        .find(|c| c["column_name"] == "id_operatora")
        .expect("id column reported");
    assert_eq!(id_column["auto"], true);
}

#[tokio::test]
#[ignore]
async fn metadata_lists_known_tables() {
    let client = Client::new();
    let base = base_url();

    let resp = client
        .get(format!("{}/api/metadata/tables", base))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let tables: Vec<Value> = resp.json().await.unwrap();
    let names: Vec<&str> = tables
        .iter()
        .filter_map(|t| t["table_name"].as_str())
        .collect();
    assert!(names.contains(&"lot"));
    assert!(names.contains(&"telemetria"));
}
