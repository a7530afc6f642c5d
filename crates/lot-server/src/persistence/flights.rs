//! Flight and telemetry persistence operations.

use anyhow::Result;
use chrono::NaiveDateTime;
use lot_core::models::{
    FlightClosed, FlightDetail, FlightRoutePoint, FlightStarted, FlightSummary, TelemetryInserted,
    TelemetryRecord, STATUS_STARTED,
};
use sqlx::PgPool;

/// Insert a new flight row with a server-assigned start time.
pub async fn start_flight(
    pool: &PgPool,
    id_operatora: i32,
    id_drona: i32,
    id_trasy: i32,
    id_typ: i32,
) -> Result<FlightStarted> {
    let flight = sqlx::query_as::<_, FlightStarted>(
        r#"
        INSERT INTO lot (id_operatora, id_drona, id_trasy, czas_startu, status, id_typ)
        VALUES ($1, $2, $3, now()::timestamp, $4, $5)
        RETURNING id_lotu, czas_startu, status, id_operatora, id_drona, id_trasy, id_typ
        "#,
    )
    .bind(id_operatora)
    .bind(id_drona)
    .bind(id_trasy)
    .bind(STATUS_STARTED)
    .bind(id_typ)
    .fetch_one(pool)
    .await?;

    Ok(flight)
}

/// Move a flight to a terminal status. The `czas_konca IS NULL` predicate
/// makes the transition a single atomic statement; `None` means the flight
/// does not exist or is already closed.
pub async fn close_flight(pool: &PgPool, id_lotu: i32, status: &str) -> Result<Option<FlightClosed>> {
    let flight = sqlx::query_as::<_, FlightClosed>(
        r#"
        UPDATE lot
        SET status = $1, czas_konca = now()::timestamp
        WHERE id_lotu = $2 AND czas_konca IS NULL
        RETURNING id_lotu, status, czas_startu, czas_konca
        "#,
    )
    .bind(status)
    .bind(id_lotu)
    .fetch_optional(pool)
    .await?;

    Ok(flight)
}

/// Check whether a flight row exists.
pub async fn flight_exists(pool: &PgPool, id_lotu: i32) -> Result<bool> {
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM lot WHERE id_lotu = $1)")
        .bind(id_lotu)
        .fetch_one(pool)
        .await?;

    Ok(exists.0)
}

/// Insert a telemetry point for a flight. A `None` timestamp falls back to
/// the database clock, matching the one used for `czas_startu`.
#[allow(clippy::too_many_arguments)]
pub async fn insert_telemetry(
    pool: &PgPool,
    id_lotu: i32,
    czas: Option<NaiveDateTime>,
    lat: f64,
    lon: f64,
    wysokosc_m: Option<f64>,
    predkosc_m_s: Option<f64>,
    bateria_pro: Option<f64>,
    sila_sygnalu: Option<&str>,
) -> Result<TelemetryInserted> {
    let inserted = sqlx::query_as::<_, TelemetryInserted>(
        r#"
        INSERT INTO telemetria (
            id_lotu, czas, wspolrzedne, wysokosc_m, predkosc_m_s, bateria_pro, sila_sygnalu
        )
        VALUES ($1, COALESCE($2, now()::timestamp),
                ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography, $5, $6, $7, $8)
        RETURNING id_telemetrii, id_lotu, czas
        "#,
    )
    .bind(id_lotu)
    .bind(czas)
    .bind(lon)
    .bind(lat)
    .bind(wysokosc_m)
    .bind(predkosc_m_s)
    .bind(bateria_pro)
    .bind(sila_sygnalu)
    .fetch_one(pool)
    .await?;

    Ok(inserted)
}

/// Flight history, newest start first.
pub async fn list_flights(pool: &PgPool) -> Result<Vec<FlightSummary>> {
    let flights = sqlx::query_as::<_, FlightSummary>(
        r#"
        SELECT l.id_lotu,
               l.id_trasy,
               t.nazwa AS nazwa_trasy,
               l.czas_startu,
               l.czas_konca,
               COALESCE(l.rzeczywisty_czas_s,
                        EXTRACT(EPOCH FROM (l.czas_konca - l.czas_startu)))::int AS czas_trwania_s,
               COALESCE(o.imie || ' ' || o.nazwisko, '') AS operator,
               l.status
        FROM lot l
        LEFT JOIN trasy    t ON t.id_trasy     = l.id_trasy
        LEFT JOIN operator o ON o.id_operatora = l.id_operatora
        ORDER BY l.czas_startu DESC NULLS LAST
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(flights)
}

/// Denormalized detail of one flight.
pub async fn flight_detail(pool: &PgPool, id_lotu: i32) -> Result<Option<FlightDetail>> {
    let detail = sqlx::query_as::<_, FlightDetail>(
        r#"
        SELECT
            l.id_lotu, l.id_trasy, l.czas_startu, l.czas_konca, l.status,
            l.rzeczywista_dlugosc_lotu_m,
            COALESCE(l.rzeczywisty_czas_s,
                     EXTRACT(EPOCH FROM (l.czas_konca - l.czas_startu)))::int AS czas_trwania_s,

            t.nazwa AS nazwa_trasy,
            t.opis  AS opis_trasy,

            o.id_operatora,
            o.imie, o.nazwisko, o.e_mail,
            o.numer_operatora AS uid_operatora,

            ed.id_drona,
            ed.numer_seryjny,
            ed.status AS status_drona,

            md.producent,
            md.nazwa_modelu,
            md.klasa_drona,
            md.masa_g,
            md.zasieg_m,
            md.predkosc_m_s,

            tl.id_typ   AS id_typu_lotu,
            tl.nazwa    AS typ_lotu,
            tl.opis     AS opis_typu,
            tl.metadane AS metadane_typu
        FROM lot l
        LEFT JOIN trasy            t  ON t.id_trasy     = l.id_trasy
        LEFT JOIN operator         o  ON o.id_operatora = l.id_operatora
        LEFT JOIN egzemplarz_drona ed ON ed.id_drona    = l.id_drona
        LEFT JOIN model_drona      md ON md.id_modelu   = ed.id_modelu
        LEFT JOIN typ_lotu         tl ON tl.id_typ      = l.id_typ
        WHERE l.id_lotu = $1
        "#,
    )
    .bind(id_lotu)
    .fetch_optional(pool)
    .await?;

    Ok(detail)
}

/// Waypoints of the route flown by a flight, in sequence order.
pub async fn flight_route_points(pool: &PgPool, id_lotu: i32) -> Result<Vec<FlightRoutePoint>> {
    let points = sqlx::query_as::<_, FlightRoutePoint>(
        r#"
        SELECT
            tp.kolejnosc,
            ST_Y(tp.wspolrzedne::geometry) AS lat,
            ST_X(tp.wspolrzedne::geometry) AS lon,
            tp.wysokosc_m,
            COALESCE(tp.opis, '') AS opis
        FROM trasy_punkty tp
        JOIN lot l ON l.id_trasy = tp.id_trasy
        WHERE l.id_lotu = $1
        ORDER BY tp.kolejnosc
        "#,
    )
    .bind(id_lotu)
    .fetch_all(pool)
    .await?;

    Ok(points)
}

/// Telemetry history of a flight, ordered by time then insertion id.
pub async fn flight_telemetry(pool: &PgPool, id_lotu: i32) -> Result<Vec<TelemetryRecord>> {
    let records = sqlx::query_as::<_, TelemetryRecord>(
        r#"
        SELECT
            tm.id_telemetrii,
            tm.czas,
            ST_Y(tm.wspolrzedne::geometry) AS lat,
            ST_X(tm.wspolrzedne::geometry) AS lon,
            tm.wysokosc_m,
            tm.predkosc_m_s,
            tm.bateria_pro,
            tm.sila_sygnalu
        FROM telemetria tm
        WHERE tm.id_lotu = $1
        ORDER BY tm.czas ASC, tm.id_telemetrii ASC
        "#,
    )
    .bind(id_lotu)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
