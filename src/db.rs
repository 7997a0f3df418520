// src/db.rs

use sqlx::PgPool;

use crate::error::AppError;

/// Seed value for a fresh store. A rotated key is never reset back to
/// this; reconciliation only heals missing or blank rows.
pub const DEFAULT_SECRET_KEY: &str = "OctObEr1St";

/// Fixed identifier of the singleton secret-key row.
const SECRET_KEY_ID: i64 = 1;

/// Creates the schema if absent and reconciles the secret-key singleton.
/// Runs at startup, before any request is served.
pub async fn init(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            options TEXT[] NOT NULL,
            correct_answer INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quiz_results (
            id BIGSERIAL PRIMARY KEY,
            user_id TEXT NOT NULL,
            score INTEGER NOT NULL,
            timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS secret_keys (
            id BIGINT PRIMARY KEY,
            key TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    reconcile_secret_key(pool).await?;

    Ok(())
}

/// Enforces the secret-key invariant: exactly one row, `id = 1`, holding
/// a non-blank value. Stray rows are dropped, a missing row is seeded
/// with the default, and a blank key is healed to the default.
pub async fn reconcile_secret_key(pool: &PgPool) -> Result<(), AppError> {
    let stray = sqlx::query("DELETE FROM secret_keys WHERE id != $1")
        .bind(SECRET_KEY_ID)
        .execute(pool)
        .await?
        .rows_affected();

    if stray > 0 {
        tracing::warn!("Removed {} stray secret key row(s)", stray);
    }

    let current: Option<(String,)> =
        sqlx::query_as("SELECT key FROM secret_keys WHERE id = $1")
            .bind(SECRET_KEY_ID)
            .fetch_optional(pool)
            .await?;

    match current {
        None => {
            sqlx::query("INSERT INTO secret_keys (id, key) VALUES ($1, $2)")
                .bind(SECRET_KEY_ID)
                .bind(DEFAULT_SECRET_KEY)
                .execute(pool)
                .await?;
            tracing::info!("Seeded default secret key");
        }
        Some((key,)) if key.trim().is_empty() => {
            sqlx::query("UPDATE secret_keys SET key = $1 WHERE id = $2")
                .bind(DEFAULT_SECRET_KEY)
                .bind(SECRET_KEY_ID)
                .execute(pool)
                .await?;
            tracing::warn!("Blank secret key healed to default");
        }
        Some(_) => {}
    }

    Ok(())
}
