//! Database metadata queries.

use anyhow::Result;
use lot_core::models::TableStat;
use sqlx::PgPool;

/// Approximate row counts per user table from planner statistics.
/// `n_live_tup` is an estimate maintained by autovacuum, not an exact count.
pub async fn table_stats(pool: &PgPool) -> Result<Vec<TableStat>> {
    let stats = sqlx::query_as::<_, TableStat>(
        r#"
        SELECT relname::text AS table_name, n_live_tup AS approx_row_count
        FROM pg_stat_user_tables
        ORDER BY relname
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(stats)
}
