// src/handlers/secret_key.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::secret_key::{SecretKey, SecretKeyResponse, UpdateSecretKeyRequest},
};

/// Returns the current secret key. Public: callers gate access on the
/// client side (score threshold), not here.
///
/// A missing singleton row is a store invariant violation, surfaced as a
/// 500 like any other persistence failure.
pub async fn get_secret_key(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let record = sqlx::query_as::<_, SecretKey>("SELECT id, key FROM secret_keys WHERE id = 1")
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to retrieve secret key: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?
        .ok_or_else(|| {
            AppError::InternalServerError("Secret key row missing".to_string())
        })?;

    Ok(Json(SecretKeyResponse {
        secret_key: record.key,
    }))
}

/// Rotates the secret key.
/// Admin only.
pub async fn update_secret_key(
    State(pool): State<PgPool>,
    Json(payload): Json<UpdateSecretKeyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_key = payload
        .new_secret_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("New secret key is required".to_string()))?;

    let result = sqlx::query("UPDATE secret_keys SET key = $1 WHERE id = 1")
        .bind(&new_key)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update secret key: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::InternalServerError(
            "Secret key row missing".to_string(),
        ));
    }

    tracing::info!("Secret key updated");

    Ok(Json(serde_json::json!({
        "message": "Secret key updated successfully"
    })))
}
