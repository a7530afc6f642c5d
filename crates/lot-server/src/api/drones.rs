//! Drone model and instance handlers.

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use crate::api::error::{db_error, not_found, ApiError};
use crate::persistence::drones;
use crate::state::AppState;
use lot_core::models::{DroneInstance, DroneModel, DroneModelWithCount};

/// `GET /api/drony/model`
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DroneModelWithCount>>, ApiError> {
    let models = drones::list_models(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu modeli", err))?;

    Ok(Json(models))
}

/// `GET /api/drony/model/:id`
pub async fn model_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DroneModel>, ApiError> {
    match drones::model_detail(state.pool(), id).await {
        Ok(Some(model)) => Ok(Json(model)),
        Ok(None) => Err(not_found(format!("Model nie istnieje: id_modelu={id}"))),
        Err(err) => Err(db_error("Błąd odczytu modelu", err)),
    }
}

/// `GET /api/drony/model/:id/egzemplarze`
pub async fn model_instances(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<DroneInstance>>, ApiError> {
    let instances = drones::model_instances(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu egzemplarzy", err))?;

    Ok(Json(instances))
}
