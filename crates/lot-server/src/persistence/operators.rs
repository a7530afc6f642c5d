//! Operator persistence operations.

use anyhow::Result;
use chrono::NaiveDate;
use lot_core::models::{Certificate, ColumnInfo, Operator, OperatorAddress};
use sqlx::PgPool;

const OPERATOR_COLUMNS: &str =
    "id_operatora, imie, nazwisko, data_urodzenia, obywatelstwo, e_mail, \
     numer_operatora, status, utworzono, zaktualizowano";

/// All operators ordered by id.
pub async fn list_operators(pool: &PgPool) -> Result<Vec<Operator>> {
    let operators = sqlx::query_as::<_, Operator>(&format!(
        "SELECT {OPERATOR_COLUMNS} FROM operator ORDER BY id_operatora"
    ))
    .fetch_all(pool)
    .await?;

    Ok(operators)
}

/// One operator.
pub async fn operator_detail(pool: &PgPool, id_operatora: i32) -> Result<Option<Operator>> {
    let operator = sqlx::query_as::<_, Operator>(&format!(
        "SELECT {OPERATOR_COLUMNS} FROM operator WHERE id_operatora = $1"
    ))
    .bind(id_operatora)
    .fetch_optional(pool)
    .await?;

    Ok(operator)
}

/// Insert a new operator and return the full created record.
pub async fn create_operator(
    pool: &PgPool,
    imie: Option<&str>,
    nazwisko: Option<&str>,
    data_urodzenia: Option<NaiveDate>,
    obywatelstwo: Option<&str>,
    e_mail: Option<&str>,
    status: Option<&str>,
) -> Result<Operator> {
    let operator = sqlx::query_as::<_, Operator>(&format!(
        r#"
        INSERT INTO operator
            (imie, nazwisko, data_urodzenia, obywatelstwo, e_mail, status, utworzono, zaktualizowano)
        VALUES ($1, $2, $3, $4, $5, $6, now(), now())
        RETURNING {OPERATOR_COLUMNS}
        "#
    ))
    .bind(imie)
    .bind(nazwisko)
    .bind(data_urodzenia)
    .bind(obywatelstwo)
    .bind(e_mail)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(operator)
}

/// Certificates of an operator, newest issue date first; undated rows last.
pub async fn operator_certificates(pool: &PgPool, id_operatora: i32) -> Result<Vec<Certificate>> {
    let certificates = sqlx::query_as::<_, Certificate>(
        r#"
        SELECT id_certyfikatu,
               nazwa,
               wystawca,
               data_wydania,
               data_wygasniecia,
               dokument_url,
               uwagi
        FROM certyfikaty
        WHERE id_operatora = $1
        ORDER BY COALESCE(data_wydania, DATE '1900-01-01') DESC, nazwa
        "#,
    )
    .bind(id_operatora)
    .fetch_all(pool)
    .await?;

    Ok(certificates)
}

/// Most recently inserted address of an operator, if any.
pub async fn operator_address(pool: &PgPool, id_operatora: i32) -> Result<Option<OperatorAddress>> {
    let address = sqlx::query_as::<_, OperatorAddress>(
        r#"
        SELECT ulica, numer_bloku, numer_mieszkania, miasto, kod_pocztowy, panstwo, numer_telefonu
        FROM adres_operatora
        WHERE id_operatora = $1
        ORDER BY id_adres DESC
        LIMIT 1
        "#,
    )
    .bind(id_operatora)
    .fetch_optional(pool)
    .await?;

    Ok(address)
}

/// Column metadata of the operator table from `information_schema`, with
/// the derived auto-generated flag.
pub async fn operator_columns(pool: &PgPool) -> Result<Vec<ColumnInfo>> {
    let rows = sqlx::query_as::<_, ColumnRow>(
        r#"
        SELECT column_name::text    AS column_name,
               data_type::text      AS data_type,
               is_nullable::text    AS is_nullable,
               column_default::text AS column_default,
               is_identity::text    AS is_identity
        FROM information_schema.columns
        WHERE table_schema = 'public' AND table_name = 'operator'
        ORDER BY ordinal_position
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ColumnInfo::from).collect())
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
    column_default: Option<String>,
    is_identity: String,
}

impl From<ColumnRow> for ColumnInfo {
    fn from(row: ColumnRow) -> Self {
        // Identity columns or sequence-backed defaults count as auto-generated
        let auto = row.is_identity == "YES"
            || row
                .column_default
                .as_deref()
                .is_some_and(|def| def.starts_with("nextval("));

        ColumnInfo {
            column_name: row.column_name,
            data_type: row.data_type,
            is_nullable: row.is_nullable,
            column_default: row.column_default,
            is_identity: row.is_identity,
            auto,
        }
    }
}
