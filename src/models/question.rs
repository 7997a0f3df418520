// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text prompt shown to the quiz taker.
    pub question: String,

    /// Ordered answer choices; index is the answer identity.
    /// Stored as a TEXT[] column.
    pub options: Vec<String>,

    /// Zero-based index into `options`.
    pub correct_answer: i32,
}

/// DTO for creating or fully replacing a question.
///
/// Call [`QuestionPayload::normalize`] before validating: blank option
/// strings are dropped (order of the rest preserved), matching what the
/// admin form submits.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_question_payload))]
pub struct QuestionPayload {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
}

impl QuestionPayload {
    /// Drops empty option strings, preserving the order of the rest.
    pub fn normalize(mut self) -> Self {
        self.options.retain(|opt| !opt.trim().is_empty());
        self
    }
}

fn validate_question_payload(
    payload: &QuestionPayload,
) -> Result<(), validator::ValidationError> {
    if payload.question.trim().is_empty() {
        return Err(validator::ValidationError::new("question_cannot_be_empty"));
    }
    if payload.options.len() < 2 || payload.options.len() > 4 {
        return Err(validator::ValidationError::new(
            "options_must_have_two_to_four_entries",
        ));
    }
    if payload.correct_answer < 0 || payload.correct_answer as usize >= payload.options.len() {
        return Err(validator::ValidationError::new(
            "correct_answer_out_of_range",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(question: &str, options: &[&str], correct_answer: i32) -> QuestionPayload {
        QuestionPayload {
            question: question.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer,
        }
    }

    #[test]
    fn normalize_drops_blank_options_preserving_order() {
        let normalized = payload("Q", &["A", "", "B", "  "], 0).normalize();
        assert_eq!(normalized.options, vec!["A", "B"]);
    }

    #[test]
    fn valid_payload_passes() {
        assert!(payload("Q", &["A", "B", "C"], 2).validate().is_ok());
    }

    #[test]
    fn correct_answer_must_index_into_options() {
        assert!(payload("Q", &["A", "B"], 2).validate().is_err());
        assert!(payload("Q", &["A", "B"], -1).validate().is_err());
        assert!(payload("Q", &["A", "B"], 1).validate().is_ok());
    }

    #[test]
    fn rejects_too_few_or_too_many_options() {
        assert!(payload("Q", &["A"], 0).validate().is_err());
        assert!(payload("Q", &["A", "B", "C", "D", "E"], 0).validate().is_err());
    }

    #[test]
    fn rejects_blank_question() {
        assert!(payload("   ", &["A", "B"], 0).validate().is_err());
    }

    #[test]
    fn normalization_can_invalidate_correct_answer() {
        // Dropping a blank slot can leave the index dangling; validation
        // after normalization must catch that.
        let normalized = payload("Q", &["A", "B", ""], 2).normalize();
        assert!(normalized.validate().is_err());
    }
}
