// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::quiz_result::{QuizStats, StoreResultRequest},
};

/// Number of questions in the authored quiz. The aggregate average is
/// expressed against this fixed length, not the current question count.
pub const QUIZ_LENGTH: i64 = 7;

/// Converts a raw average score into a 0-100 percentage over the
/// authored quiz length. `None` (no stored results) maps to 0.0 so the
/// stats endpoint never emits NaN.
fn average_percentage(avg_raw: Option<f64>) -> f64 {
    avg_raw.map(|avg| avg / QUIZ_LENGTH as f64 * 100.0).unwrap_or(0.0)
}

/// Records one completed quiz attempt.
pub async fn store_result(
    State(pool): State<PgPool>,
    Json(payload): Json<StoreResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query("INSERT INTO quiz_results (user_id, score) VALUES ($1, $2)")
        .bind(&payload.user_id)
        .bind(payload.score)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store quiz result: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    Ok(Json(serde_json::json!({
        "message": "Result stored successfully"
    })))
}

/// Returns the total attempt count and the average score percentage.
pub async fn get_quiz_stats(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let (total, avg): (i64, Option<f64>) = sqlx::query_as(
        "SELECT COUNT(*), AVG(score)::FLOAT8 FROM quiz_results",
    )
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz stats: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(QuizStats {
        total_quizzes: total,
        average_score: average_percentage(avg),
    }))
}

/// Deletes every stored quiz result.
/// Admin only.
pub async fn clear_quiz_stats(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    sqlx::query("DELETE FROM quiz_results")
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to clear quiz statistics: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    tracing::info!("Quiz statistics cleared");

    Ok(Json(serde_json::json!({
        "message": "Quiz statistics cleared successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_yields_zero_not_nan() {
        let avg = average_percentage(None);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn average_is_scaled_over_quiz_length() {
        assert_eq!(average_percentage(Some(3.5)), 50.0);
        assert_eq!(average_percentage(Some(7.0)), 100.0);
        assert_eq!(average_percentage(Some(0.0)), 0.0);
    }
}
