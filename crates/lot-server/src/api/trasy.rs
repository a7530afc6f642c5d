//! Route query handlers.
//!
//! Two endpoint groups serve the same table: `/api/route` projects the
//! stored geography endpoints into lon/lat fields, `/api/trasy` returns
//! scalar attributes only. Both ship because existing clients consume both.

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::api::error::{db_error, not_found, ApiError};
use crate::persistence::routes;
use crate::state::AppState;
use lot_core::models::{Route, RoutePoint, TrasaPoint, TrasaSummary};

/// `GET /api/route`
pub async fn list_routes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Route>>, ApiError> {
    let routes = routes::list_routes(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu tras", err))?;

    Ok(Json(routes))
}

/// `GET /api/route/:id`
pub async fn route_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Route>, ApiError> {
    match routes::route_detail(state.pool(), id).await {
        Ok(Some(route)) => Ok(Json(route)),
        Ok(None) => Err(not_found(format!("Trasa nie istnieje: id_trasy={id}"))),
        Err(err) => Err(db_error("Błąd odczytu trasy", err)),
    }
}

/// `GET /api/route/:id/points`
pub async fn route_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<RoutePoint>>, ApiError> {
    let points = routes::route_points(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu punktów trasy", err))?;

    Ok(Json(points))
}

/// `GET /api/trasy`
pub async fn list_trasy(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TrasaSummary>>, ApiError> {
    let routes = routes::list_trasy(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu tras", err))?;

    Ok(Json(routes))
}

/// `GET /api/trasy/:id`
pub async fn trasa_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TrasaSummary>, ApiError> {
    match routes::trasa_detail(state.pool(), id).await {
        Ok(Some(route)) => Ok(Json(route)),
        Ok(None) => Err(not_found(format!("Trasa nie istnieje: id_trasy={id}"))),
        Err(err) => Err(db_error("Błąd odczytu trasy", err)),
    }
}

/// `GET /api/trasy/:id/punkty`
pub async fn trasa_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TrasaPoint>>, ApiError> {
    let points = routes::trasa_points(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu punktów trasy", err))?;

    Ok(Json(points))
}
