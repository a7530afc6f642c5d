//! REST API routes.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

use crate::api::error::{db_error, not_found, ApiError};
use crate::api::{drones, flights, operators, trasy};
use crate::persistence::{flight_types, metadata};
use crate::state::AppState;
use lot_core::models::{FlightType, TableStat};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Flight lifecycle and telemetry
        .route("/api/lot/start", post(flights::start_flight))
        .route("/api/lot/:id/finish", post(flights::finish_flight))
        .route("/api/lot/:id/abort", post(flights::abort_flight))
        .route(
            "/api/lot/:id/telemetria",
            post(flights::add_telemetry).get(flights::flight_telemetry),
        )
        .route("/api/lot", get(flights::list_flights))
        .route("/api/lot/:id", get(flights::flight_detail))
        .route("/api/lot/:id/route-points", get(flights::flight_route_points))
        // Route queries, geography-projection variant
        .route("/api/route", get(trasy::list_routes))
        .route("/api/route/:id", get(trasy::route_detail))
        .route("/api/route/:id/points", get(trasy::route_points))
        // Route queries, plain variant
        .route("/api/trasy", get(trasy::list_trasy))
        .route("/api/trasy/:id", get(trasy::trasa_detail))
        .route("/api/trasy/:id/punkty", get(trasy::trasa_points))
        // Drone models and instances
        .route("/api/drony/model", get(drones::list_models))
        .route("/api/drony/model/:id", get(drones::model_detail))
        .route(
            "/api/drony/model/:id/egzemplarze",
            get(drones::model_instances),
        )
        // Flight type lookups
        .route("/api/typ_lotu", get(list_flight_types))
        .route("/api/typ_lotu/:id", get(flight_type_detail))
        // Operators
        .route(
            "/api/operator",
            get(operators::list_operators).post(operators::create_operator),
        )
        .route("/api/operator/columns", get(operators::operator_columns))
        .route("/api/operator/:id", get(operators::operator_detail))
        .route(
            "/api/operator/:id/certyfikaty",
            get(operators::operator_certificates),
        )
        .route("/api/operator/:id/adres", get(operators::operator_address))
        // Database metadata
        .route("/api/metadata/tables", get(table_stats))
}

// === Lookup handlers ===

/// `GET /api/typ_lotu`
async fn list_flight_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FlightType>>, ApiError> {
    let types = flight_types::list_flight_types(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu typów lotu", err))?;

    Ok(Json(types))
}

/// `GET /api/typ_lotu/:id`
async fn flight_type_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<FlightType>, ApiError> {
    match flight_types::flight_type(state.pool(), id).await {
        Ok(Some(flight_type)) => Ok(Json(flight_type)),
        Ok(None) => Err(not_found(format!("Typ lotu nie istnieje: id_typ={id}"))),
        Err(err) => Err(db_error("Błąd odczytu typu lotu", err)),
    }
}

/// `GET /api/metadata/tables`: approximate row counts from
/// `pg_stat_user_tables`.
async fn table_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TableStat>>, ApiError> {
    let stats = metadata::table_stats(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu statystyk", err))?;

    Ok(Json(stats))
}
