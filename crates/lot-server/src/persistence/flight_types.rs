//! Flight type lookup queries.

use anyhow::Result;
use lot_core::models::FlightType;
use sqlx::PgPool;

pub async fn list_flight_types(pool: &PgPool) -> Result<Vec<FlightType>> {
    let types =
        sqlx::query_as::<_, FlightType>("SELECT id_typ, nazwa FROM typ_lotu ORDER BY nazwa")
            .fetch_all(pool)
            .await?;

    Ok(types)
}

pub async fn flight_type(pool: &PgPool, id_typ: i32) -> Result<Option<FlightType>> {
    let flight_type =
        sqlx::query_as::<_, FlightType>("SELECT id_typ, nazwa FROM typ_lotu WHERE id_typ = $1")
            .bind(id_typ)
            .fetch_optional(pool)
            .await?;

    Ok(flight_type)
}
