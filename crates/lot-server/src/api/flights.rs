//! Flight lifecycle and telemetry handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::{bad_request, db_error, not_found, ApiError};
use crate::persistence::flights;
use crate::state::AppState;
use lot_core::models::{
    FlightClosed, FlightDetail, FlightRoutePoint, FlightStarted, FlightSummary,
    TelemetryInserted, TelemetryRecord, STATUS_ABORTED, STATUS_FINISHED,
};
use lot_core::validation::{telemetry_timestamp, validate_coordinates};

/// Body of `POST /api/lot/start`. All four ids are required; they are
/// optional here so the handler can report a 400 instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct StartFlightRequest {
    pub id_operatora: Option<i32>,
    pub id_drona: Option<i32>,
    pub id_trasy: Option<i32>,
    pub id_typ: Option<i32>,
}

/// Body of `POST /api/lot/:id/telemetria`.
#[derive(Debug, Deserialize)]
pub struct TelemetryCreateRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub wysokosc_m: Option<f64>,
    /// Client-side capture time as epoch milliseconds. The database clock
    /// is used when absent or not representable.
    pub czas_ms: Option<i64>,
    pub predkosc_m_s: Option<f64>,
    pub bateria_pro: Option<f64>,
    pub sila_sygnalu: Option<String>,
}

/// `POST /api/lot/start`: create a new flight with a server-assigned
/// start time and status "Rozpoczęty".
pub async fn start_flight(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartFlightRequest>,
) -> Result<Json<FlightStarted>, ApiError> {
    let (Some(id_operatora), Some(id_drona), Some(id_trasy), Some(id_typ)) =
        (req.id_operatora, req.id_drona, req.id_trasy, req.id_typ)
    else {
        return Err(bad_request(
            "Brak wymaganych pól: id_operatora, id_drona, id_trasy, id_typ",
        ));
    };

    let flight = flights::start_flight(state.pool(), id_operatora, id_drona, id_trasy, id_typ)
        .await
        .map_err(|err| db_error("Błąd zapisu lotu", err))?;

    tracing::info!("Started flight {}", flight.id_lotu);
    Ok(Json(flight))
}

/// `POST /api/lot/:id/finish`
pub async fn finish_flight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<FlightClosed>, ApiError> {
    close_flight(&state, id, STATUS_FINISHED).await
}

/// `POST /api/lot/:id/abort`
pub async fn abort_flight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<FlightClosed>, ApiError> {
    close_flight(&state, id, STATUS_ABORTED).await
}

async fn close_flight(
    state: &AppState,
    id: i32,
    status: &str,
) -> Result<Json<FlightClosed>, ApiError> {
    match flights::close_flight(state.pool(), id, status).await {
        Ok(Some(flight)) => {
            tracing::info!("Flight {} closed with status {}", id, status);
            Ok(Json(flight))
        }
        // The conditional UPDATE matched nothing: unknown id or already closed
        Ok(None) => Err(not_found(format!(
            "Lot nie istnieje albo już zakończony: id_lotu={id}"
        ))),
        Err(err) => Err(db_error("Błąd zamykania lotu", err)),
    }
}

/// `POST /api/lot/:id/telemetria`: append one telemetry point.
pub async fn add_telemetry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<TelemetryCreateRequest>,
) -> Result<Json<TelemetryInserted>, ApiError> {
    let (Some(lat), Some(lon)) = (req.lat, req.lon) else {
        return Err(bad_request("Brak lat/lon"));
    };
    if validate_coordinates(lat, lon).is_err() {
        return Err(bad_request("Nieprawidłowe lat/lon"));
    }

    let exists = flights::flight_exists(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu lotu", err))?;
    if !exists {
        return Err(not_found(format!("Lot nie istnieje: id_lotu={id}")));
    }

    let czas = telemetry_timestamp(req.czas_ms);
    let inserted = flights::insert_telemetry(
        state.pool(),
        id,
        czas,
        lat,
        lon,
        req.wysokosc_m,
        req.predkosc_m_s,
        req.bateria_pro,
        req.sila_sygnalu.as_deref(),
    )
    .await
    .map_err(|err| db_error("Błąd zapisu telemetrii", err))?;

    Ok(Json(inserted))
}

/// `GET /api/lot`: flight history, newest start first.
pub async fn list_flights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FlightSummary>>, ApiError> {
    let flights = flights::list_flights(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu lotów", err))?;

    Ok(Json(flights))
}

/// `GET /api/lot/:id`: denormalized flight detail.
pub async fn flight_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<FlightDetail>, ApiError> {
    match flights::flight_detail(state.pool(), id).await {
        Ok(Some(detail)) => Ok(Json(detail)),
        Ok(None) => Err(not_found(format!("Lot nie istnieje: id_lotu={id}"))),
        Err(err) => Err(db_error("Błąd odczytu lotu", err)),
    }
}

/// `GET /api/lot/:id/route-points`: waypoints of the flight's route.
pub async fn flight_route_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FlightRoutePoint>>, ApiError> {
    let points = flights::flight_route_points(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu punktów trasy", err))?;

    Ok(Json(points))
}

/// `GET /api/lot/:id/telemetria`: stored telemetry of a flight.
pub async fn flight_telemetry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TelemetryRecord>>, ApiError> {
    let records = flights::flight_telemetry(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu telemetrii", err))?;

    Ok(Json(records))
}
