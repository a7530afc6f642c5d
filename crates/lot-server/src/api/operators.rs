//! Operator management handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::error::{bad_request, db_error, not_found, ApiError};
use crate::persistence::operators;
use crate::state::AppState;
use lot_core::models::{Certificate, ColumnInfo, Operator};
use lot_core::validation::parse_optional_date;

/// Body of `POST /api/operator`.
#[derive(Debug, Deserialize)]
pub struct OperatorCreateRequest {
    pub imie: Option<String>,
    pub nazwisko: Option<String>,
    /// ISO date string (`YYYY-MM-DD`); blank counts as absent.
    pub data_urodzenia: Option<String>,
    pub obywatelstwo: Option<String>,
    pub e_mail: Option<String>,
    pub status: Option<String>,
}

/// `GET /api/operator`
pub async fn list_operators(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Operator>>, ApiError> {
    let operators = operators::list_operators(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu operatorów", err))?;

    Ok(Json(operators))
}

/// `GET /api/operator/:id`
pub async fn operator_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Operator>, ApiError> {
    match operators::operator_detail(state.pool(), id).await {
        Ok(Some(operator)) => Ok(Json(operator)),
        Ok(None) => Err(not_found(format!(
            "Operator nie istnieje: id_operatora={id}"
        ))),
        Err(err) => Err(db_error("Błąd odczytu operatora", err)),
    }
}

/// `POST /api/operator`: create an operator; `data_urodzenia` is an
/// optional ISO date string.
pub async fn create_operator(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OperatorCreateRequest>,
) -> Result<Json<Operator>, ApiError> {
    let data_urodzenia = parse_optional_date(req.data_urodzenia.as_deref())
        .map_err(|_| bad_request("Nieprawidłowa data_urodzenia (oczekiwano RRRR-MM-DD)"))?;

    let operator = operators::create_operator(
        state.pool(),
        req.imie.as_deref(),
        req.nazwisko.as_deref(),
        data_urodzenia,
        req.obywatelstwo.as_deref(),
        req.e_mail.as_deref(),
        req.status.as_deref(),
    )
    .await
    .map_err(|err| db_error("Błąd zapisu operatora", err))?;

    tracing::info!("Created operator {}", operator.id_operatora);
    Ok(Json(operator))
}

/// `GET /api/operator/:id/certyfikaty`
pub async fn operator_certificates(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Certificate>>, ApiError> {
    let certificates = operators::operator_certificates(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu certyfikatów", err))?;

    Ok(Json(certificates))
}

/// `GET /api/operator/:id/adres`: latest address, or an empty object when
/// the operator has none.
pub async fn operator_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let address = operators::operator_address(state.pool(), id)
        .await
        .map_err(|err| db_error("Błąd odczytu adresu", err))?;

    let body = match address {
        Some(address) => serde_json::to_value(address).unwrap_or_else(|_| json!({})),
        None => json!({}),
    };
    Ok(Json(body))
}

/// `GET /api/operator/columns`: schema introspection of the operator table.
pub async fn operator_columns(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ColumnInfo>>, ApiError> {
    let columns = operators::operator_columns(state.pool())
        .await
        .map_err(|err| db_error("Błąd odczytu kolumn", err))?;

    Ok(Json(columns))
}
