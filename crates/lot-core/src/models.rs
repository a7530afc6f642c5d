//! Data models for the flight tracking API.
//!
//! Field names are the Polish column names of the underlying database
//! schema; they double as the JSON contract of the HTTP API, so renaming
//! a field here is a breaking API change.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Status written when a flight is started.
pub const STATUS_STARTED: &str = "Rozpoczęty";
/// Terminal status for a flight that finished normally.
pub const STATUS_FINISHED: &str = "Zakończony";
/// Terminal status for a flight aborted mid-mission.
pub const STATUS_ABORTED: &str = "Przerwany";

// === Flight rows ===

/// Row returned by the flight-start INSERT.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightStarted {
    pub id_lotu: i32,
    pub czas_startu: NaiveDateTime,
    pub status: String,
    pub id_operatora: i32,
    pub id_drona: i32,
    pub id_trasy: i32,
    pub id_typ: i32,
}

/// Row returned by the finish/abort UPDATE.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightClosed {
    pub id_lotu: i32,
    pub status: String,
    pub czas_startu: Option<NaiveDateTime>,
    pub czas_konca: Option<NaiveDateTime>,
}

/// Row returned by the telemetry INSERT.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TelemetryInserted {
    pub id_telemetrii: i32,
    pub id_lotu: i32,
    pub czas: NaiveDateTime,
}

/// One entry of the flight history listing. Route and operator come from
/// LEFT JOINs, so everything past the flight's own columns is nullable.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightSummary {
    pub id_lotu: i32,
    pub id_trasy: Option<i32>,
    pub nazwa_trasy: Option<String>,
    pub czas_startu: Option<NaiveDateTime>,
    pub czas_konca: Option<NaiveDateTime>,
    /// Stored duration when present, otherwise `czas_konca - czas_startu`;
    /// null while the flight is still open.
    pub czas_trwania_s: Option<i32>,
    pub operator: String,
    pub status: String,
}

/// Denormalized flight detail across route, operator, drone and type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightDetail {
    pub id_lotu: i32,
    pub id_trasy: Option<i32>,
    pub czas_startu: Option<NaiveDateTime>,
    pub czas_konca: Option<NaiveDateTime>,
    pub status: String,
    pub rzeczywista_dlugosc_lotu_m: Option<f64>,
    pub czas_trwania_s: Option<i32>,
    pub nazwa_trasy: Option<String>,
    pub opis_trasy: Option<String>,
    pub id_operatora: Option<i32>,
    pub imie: Option<String>,
    pub nazwisko: Option<String>,
    pub e_mail: Option<String>,
    pub uid_operatora: Option<String>,
    pub id_drona: Option<i32>,
    pub numer_seryjny: Option<String>,
    pub status_drona: Option<String>,
    pub producent: Option<String>,
    pub nazwa_modelu: Option<String>,
    pub klasa_drona: Option<String>,
    pub masa_g: Option<i32>,
    pub zasieg_m: Option<f64>,
    pub predkosc_m_s: Option<f64>,
    pub id_typu_lotu: Option<i32>,
    pub typ_lotu: Option<String>,
    pub opis_typu: Option<String>,
    pub metadane_typu: Option<serde_json::Value>,
}

/// Waypoint of a flight's route, as served under `/api/lot/:id/route-points`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightRoutePoint {
    pub kolejnosc: i32,
    pub lat: f64,
    pub lon: f64,
    pub wysokosc_m: Option<f64>,
    pub opis: String,
}

/// Stored telemetry point with the geography column projected to lat/lon.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TelemetryRecord {
    pub id_telemetrii: i32,
    pub czas: NaiveDateTime,
    pub lat: f64,
    pub lon: f64,
    pub wysokosc_m: Option<f64>,
    pub predkosc_m_s: Option<f64>,
    pub bateria_pro: Option<f64>,
    pub sila_sygnalu: Option<String>,
}

// === Route rows ===

/// Route with start/end geography projected to lon/lat (`/api/route`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Route {
    pub id_trasy: i32,
    pub nazwa: String,
    pub opis: Option<String>,
    pub planowana_dlugosc_m: Option<f64>,
    pub planowany_czas_min: Option<f64>,
    pub start_lon: Option<f64>,
    pub start_lat: Option<f64>,
    pub end_lon: Option<f64>,
    pub end_lat: Option<f64>,
}

/// Route waypoint (`/api/route/:id/points`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoutePoint {
    pub id_punktu: i32,
    pub id_trasy: i32,
    pub kolejnosc: i32,
    pub lon: f64,
    pub lat: f64,
    pub wysokosc_m: Option<f64>,
    pub opis: Option<String>,
}

/// Route without geography projections (`/api/trasy`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrasaSummary {
    pub id_trasy: i32,
    pub nazwa: String,
    pub opis: Option<String>,
    pub planowana_dlugosc_m: Option<f64>,
    pub planowany_czas_min: Option<f64>,
}

/// Route waypoint as served under `/api/trasy/:id/punkty`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrasaPoint {
    pub id_punktu: i32,
    pub id_trasy: i32,
    pub kolejnosc: i32,
    pub lat: f64,
    pub lon: f64,
    pub wysokosc_m: Option<f64>,
}

// === Drone rows ===

/// Drone model with its instance count (`/api/drony/model`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DroneModelWithCount {
    pub id_modelu: i32,
    pub producent: String,
    pub nazwa_modelu: String,
    pub klasa_drona: Option<String>,
    pub masa_g: Option<i32>,
    pub liczba_egzemplarzy: i64,
}

/// Drone model detail.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DroneModel {
    pub id_modelu: i32,
    pub producent: String,
    pub nazwa_modelu: String,
    pub klasa_drona: Option<String>,
    pub masa_g: Option<i32>,
}

/// Physical drone instance of a model.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DroneInstance {
    pub id_drona: i32,
    pub status: Option<String>,
    pub numer_seryjny: String,
    pub data_zakupu: Option<NaiveDate>,
}

// === Lookup and operator rows ===

/// Flight type lookup row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FlightType {
    pub id_typ: i32,
    pub nazwa: String,
}

/// Full operator record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Operator {
    pub id_operatora: i32,
    pub imie: Option<String>,
    pub nazwisko: Option<String>,
    pub data_urodzenia: Option<NaiveDate>,
    pub obywatelstwo: Option<String>,
    pub e_mail: Option<String>,
    pub numer_operatora: Option<String>,
    pub status: Option<String>,
    pub utworzono: Option<NaiveDateTime>,
    pub zaktualizowano: Option<NaiveDateTime>,
}

/// Certificate held by an operator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certificate {
    pub id_certyfikatu: i32,
    pub nazwa: String,
    pub wystawca: Option<String>,
    pub data_wydania: Option<NaiveDate>,
    pub data_wygasniecia: Option<NaiveDate>,
    pub dokument_url: Option<String>,
    pub uwagi: Option<String>,
}

/// Most recently inserted address of an operator.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OperatorAddress {
    pub ulica: Option<String>,
    pub numer_bloku: Option<String>,
    pub numer_mieszkania: Option<String>,
    pub miasto: Option<String>,
    pub kod_pocztowy: Option<String>,
    pub panstwo: Option<String>,
    pub numer_telefonu: Option<String>,
}

/// Column metadata of the operator table with the derived `auto` flag
/// (identity columns and `nextval(...)`-backed defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: String,
    pub column_default: Option<String>,
    pub is_identity: String,
    pub auto: bool,
}

/// Approximate per-table row count from planner statistics.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TableStat {
    pub table_name: String,
    pub approx_row_count: i64,
}
