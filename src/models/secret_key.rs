// src/models/secret_key.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'secret_keys' table. Exactly one row (id = 1) exists
/// at any time; startup reconciliation enforces this.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SecretKey {
    pub id: i64,
    pub key: String,
}

/// Response body for the public key-retrieval endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeyResponse {
    pub secret_key: String,
}

/// DTO for rotating the secret key. The field is optional so that an
/// absent value maps to a 400 rather than a deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecretKeyRequest {
    pub new_secret_key: Option<String>,
}
