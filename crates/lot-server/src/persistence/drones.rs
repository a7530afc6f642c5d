//! Drone model and instance persistence operations.

use anyhow::Result;
use lot_core::models::{DroneInstance, DroneModel, DroneModelWithCount};
use sqlx::PgPool;

/// Drone models with their instance counts.
pub async fn list_models(pool: &PgPool) -> Result<Vec<DroneModelWithCount>> {
    let models = sqlx::query_as::<_, DroneModelWithCount>(
        r#"
        SELECT m.id_modelu,
               m.producent,
               m.nazwa_modelu,
               m.klasa_drona,
               m.masa_g,
               COALESCE(cnt.cnt, 0) AS liczba_egzemplarzy
        FROM model_drona m
        LEFT JOIN (
            SELECT id_modelu, COUNT(*) AS cnt
            FROM egzemplarz_drona
            GROUP BY id_modelu
        ) cnt ON cnt.id_modelu = m.id_modelu
        ORDER BY m.producent, m.nazwa_modelu
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(models)
}

/// One drone model.
pub async fn model_detail(pool: &PgPool, id_modelu: i32) -> Result<Option<DroneModel>> {
    let model = sqlx::query_as::<_, DroneModel>(
        r#"
        SELECT id_modelu, producent, nazwa_modelu, klasa_drona, masa_g
        FROM model_drona
        WHERE id_modelu = $1
        "#,
    )
    .bind(id_modelu)
    .fetch_optional(pool)
    .await?;

    Ok(model)
}

/// Instances of a model, newest purchase first; undated rows sort last.
pub async fn model_instances(pool: &PgPool, id_modelu: i32) -> Result<Vec<DroneInstance>> {
    let instances = sqlx::query_as::<_, DroneInstance>(
        r#"
        SELECT id_drona, status, numer_seryjny, data_zakupu
        FROM egzemplarz_drona
        WHERE id_modelu = $1
        ORDER BY COALESCE(data_zakupu, DATE '1900-01-01') DESC, numer_seryjny
        "#,
    )
    .bind(id_modelu)
    .fetch_all(pool)
    .await?;

    Ok(instances)
}
