// src/client/admin.rs

use crate::{
    client::api::{AdminCredential, ApiClient, ClientError},
    models::{
        question::{Question, QuestionPayload},
        quiz_result::QuizStats,
    },
};

/// The admin question form: one shared shape for add and edit. The first
/// two option slots are mandatory, the last two optional; blank slots
/// are dropped when building the payload.
#[derive(Debug, Clone, Default)]
pub struct QuestionForm {
    /// Present when editing, absent when adding.
    pub id: Option<i64>,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub correct_answer: i32,
}

impl QuestionForm {
    /// Pre-fills the form from an existing question for editing.
    pub fn edit(question: &Question) -> Self {
        let slot = |i: usize| question.options.get(i).cloned().unwrap_or_default();
        Self {
            id: Some(question.id),
            question: question.question.clone(),
            option1: slot(0),
            option2: slot(1),
            option3: slot(2),
            option4: slot(3),
            correct_answer: question.correct_answer,
        }
    }

    /// Collapses the four slots into the request payload, dropping blank
    /// entries while preserving the order of the rest.
    pub fn into_payload(self) -> QuestionPayload {
        let options = [self.option1, self.option2, self.option3, self.option4]
            .into_iter()
            .filter(|opt| !opt.trim().is_empty())
            .collect();
        QuestionPayload {
            question: self.question,
            options,
            correct_answer: self.correct_answer,
        }
    }
}

/// Admin-panel flow over the API: question management, aggregate stats,
/// and secret-key rotation, all under one credential.
#[derive(Debug, Clone)]
pub struct AdminPanel {
    client: ApiClient,
    credential: AdminCredential,
}

impl AdminPanel {
    pub fn new(client: ApiClient, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            client,
            credential: AdminCredential {
                username: username.into(),
                password: password.into(),
            },
        }
    }

    /// Initial panel load: the full question list plus aggregate stats.
    pub async fn load(&self) -> Result<(Vec<Question>, QuizStats), ClientError> {
        let questions = self.client.fetch_questions().await?;
        let stats = self.client.fetch_quiz_stats().await?;
        Ok((questions, stats))
    }

    /// Dispatches create or update depending on whether the form carries
    /// an identifier.
    pub async fn submit_form(&self, form: QuestionForm) -> Result<Question, ClientError> {
        let id = form.id;
        let payload = form.into_payload();
        match id {
            Some(id) => self.client.update_question(&self.credential, id, &payload).await,
            None => self.client.create_question(&self.credential, &payload).await,
        }
    }

    /// Deletes a question. `confirmed` carries the interactive
    /// confirmation; without it nothing is dispatched and `false` is
    /// returned.
    pub async fn delete_question(&self, id: i64, confirmed: bool) -> Result<bool, ClientError> {
        if !confirmed {
            return Ok(false);
        }
        self.client.delete_question(&self.credential, id).await?;
        Ok(true)
    }

    pub async fn clear_quiz_stats(&self) -> Result<(), ClientError> {
        self.client.clear_quiz_stats(&self.credential).await
    }

    /// Rotates the secret key, returning the service's confirmation
    /// message for display.
    pub async fn rotate_secret_key(&self, new_key: &str) -> Result<String, ClientError> {
        self.client.update_secret_key(&self.credential, new_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn blank_trailing_slots_are_dropped() {
        let form = QuestionForm {
            question: "Q".into(),
            option1: "A".into(),
            option2: "B".into(),
            correct_answer: 1,
            ..Default::default()
        };
        let payload = form.into_payload();
        assert_eq!(payload.options, vec!["A", "B"]);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn blank_middle_slot_preserves_order_of_the_rest() {
        let form = QuestionForm {
            question: "Q".into(),
            option1: "A".into(),
            option2: "B".into(),
            option4: "D".into(),
            correct_answer: 2,
            ..Default::default()
        };
        assert_eq!(form.into_payload().options, vec!["A", "B", "D"]);
    }

    #[test]
    fn edit_round_trips_through_the_form() {
        let question = Question {
            id: 7,
            question: "Q".into(),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: 2,
        };
        let form = QuestionForm::edit(&question);
        assert_eq!(form.id, Some(7));
        let payload = form.into_payload();
        assert_eq!(payload.options, question.options);
        assert_eq!(payload.correct_answer, 2);
    }
}
