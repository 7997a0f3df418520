// src/models/quiz_result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'quiz_results' table in the database.
/// One row per completed quiz attempt; rows are never updated and are
/// only deleted in bulk by the admin clear-stats action.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    /// Client-generated opaque identifier. Not authenticated, not unique.
    pub user_id: String,
    pub score: i32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// DTO for recording a finished attempt.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResultRequest {
    pub user_id: String,
    pub score: i32,
}

/// Aggregate statistics shown on the admin panel.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub total_quizzes: i64,
    /// Average raw score over the authored quiz length, on a 0-100 scale.
    pub average_score: f64,
}
