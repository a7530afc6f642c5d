//! Route persistence operations.
//!
//! Two parallel query sets back the `/api/route` and `/api/trasy` endpoint
//! groups; the first projects the stored geography endpoints into lon/lat
//! columns, the second returns only the scalar route attributes.

use anyhow::Result;
use lot_core::models::{Route, RoutePoint, TrasaPoint, TrasaSummary};
use sqlx::PgPool;

/// All routes with start/end coordinates projected from geography.
pub async fn list_routes(pool: &PgPool) -> Result<Vec<Route>> {
    let routes = sqlx::query_as::<_, Route>(
        r#"
        SELECT
            id_trasy,
            nazwa,
            opis,
            planowana_dlugosc_m,
            planowany_czas_min,
            ST_X(punkt_startu::geometry)  AS start_lon,
            ST_Y(punkt_startu::geometry)  AS start_lat,
            ST_X(punkt_koncowy::geometry) AS end_lon,
            ST_Y(punkt_koncowy::geometry) AS end_lat
        FROM trasy
        ORDER BY id_trasy
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(routes)
}

/// One route with projected endpoints.
pub async fn route_detail(pool: &PgPool, id_trasy: i32) -> Result<Option<Route>> {
    let route = sqlx::query_as::<_, Route>(
        r#"
        SELECT
            id_trasy,
            nazwa,
            opis,
            planowana_dlugosc_m,
            planowany_czas_min,
            ST_X(punkt_startu::geometry)  AS start_lon,
            ST_Y(punkt_startu::geometry)  AS start_lat,
            ST_X(punkt_koncowy::geometry) AS end_lon,
            ST_Y(punkt_koncowy::geometry) AS end_lat
        FROM trasy
        WHERE id_trasy = $1
        "#,
    )
    .bind(id_trasy)
    .fetch_optional(pool)
    .await?;

    Ok(route)
}

/// Ordered waypoints of a route, with descriptions.
pub async fn route_points(pool: &PgPool, id_trasy: i32) -> Result<Vec<RoutePoint>> {
    let points = sqlx::query_as::<_, RoutePoint>(
        r#"
        SELECT
            id_punktu,
            id_trasy,
            kolejnosc,
            ST_X(wspolrzedne::geometry) AS lon,
            ST_Y(wspolrzedne::geometry) AS lat,
            wysokosc_m,
            opis
        FROM trasy_punkty
        WHERE id_trasy = $1
        ORDER BY kolejnosc
        "#,
    )
    .bind(id_trasy)
    .fetch_all(pool)
    .await?;

    Ok(points)
}

/// All routes, scalar attributes only.
pub async fn list_trasy(pool: &PgPool) -> Result<Vec<TrasaSummary>> {
    let routes = sqlx::query_as::<_, TrasaSummary>(
        r#"
        SELECT
            id_trasy,
            nazwa,
            opis,
            planowana_dlugosc_m,
            planowany_czas_min
        FROM trasy
        ORDER BY id_trasy
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(routes)
}

/// One route, scalar attributes only.
pub async fn trasa_detail(pool: &PgPool, id_trasy: i32) -> Result<Option<TrasaSummary>> {
    let route = sqlx::query_as::<_, TrasaSummary>(
        r#"
        SELECT
            id_trasy,
            nazwa,
            opis,
            planowana_dlugosc_m,
            planowany_czas_min
        FROM trasy
        WHERE id_trasy = $1
        "#,
    )
    .bind(id_trasy)
    .fetch_optional(pool)
    .await?;

    Ok(route)
}

/// Ordered waypoints of a route, without descriptions.
pub async fn trasa_points(pool: &PgPool, id_trasy: i32) -> Result<Vec<TrasaPoint>> {
    let points = sqlx::query_as::<_, TrasaPoint>(
        r#"
        SELECT
            id_punktu,
            id_trasy,
            kolejnosc,
            ST_Y(wspolrzedne::geometry) AS lat,
            ST_X(wspolrzedne::geometry) AS lon,
            wysokosc_m
        FROM trasy_punkty
        WHERE id_trasy = $1
        ORDER BY kolejnosc ASC
        "#,
    )
    .bind(id_trasy)
    .fetch_all(pool)
    .await?;

    Ok(points)
}
