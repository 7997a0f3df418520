// src/client/api.rs

use std::fmt;

use crate::models::{
    question::{Question, QuestionPayload},
    quiz_result::{QuizStats, StoreResultRequest},
    secret_key::SecretKeyResponse,
};

/// Errors surfaced by the typed API client.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decode).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "http error: {}", e),
            ClientError::Api { status, message } => {
                write!(f, "api error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

/// Admin username/password pair sent as HTTP Basic.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

/// Typed client over the quiz API, shared by the quiz and admin flows.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps non-success responses to `ClientError::Api`, pulling the
    /// service's `{"error": ...}` message when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "request failed".to_string());
        Err(ClientError::Api { status, message })
    }

    pub async fn fetch_questions(&self) -> Result<Vec<Question>, ClientError> {
        let response = self.http.get(self.url("/api/questions")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn fetch_question(&self, id: i64) -> Result<Question, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/questions/{}", id)))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn fetch_quiz_stats(&self) -> Result<QuizStats, ClientError> {
        let response = self.http.get(self.url("/api/quiz-stats")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn store_result(&self, user_id: &str, score: i32) -> Result<(), ClientError> {
        let body = StoreResultRequest {
            user_id: user_id.to_string(),
            score,
        };
        let response = self
            .http
            .post(self.url("/api/store-result"))
            .json(&body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Fire-and-forget result recording: the quiz result is shown
    /// immediately and storage happens in the background. Failure never
    /// reaches the user but is logged with enough context to follow up.
    pub fn store_result_detached(&self, user_id: String, score: i32) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.store_result(&user_id, score).await {
                tracing::warn!(user_id = %user_id, score, "Failed to store quiz result: {}", e);
            }
        });
    }

    /// Retrieves the secret key. Manual, user-triggered: callers invoke
    /// this only after the pass threshold is met.
    pub async fn fetch_secret_key(&self) -> Result<String, ClientError> {
        let response = self.http.post(self.url("/api/secret-key")).send().await?;
        let body: SecretKeyResponse = Self::check(response).await?.json().await?;
        Ok(body.secret_key)
    }

    pub async fn create_question(
        &self,
        auth: &AdminCredential,
        payload: &QuestionPayload,
    ) -> Result<Question, ClientError> {
        let response = self
            .http
            .post(self.url("/api/questions"))
            .basic_auth(&auth.username, Some(&auth.password))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn update_question(
        &self,
        auth: &AdminCredential,
        id: i64,
        payload: &QuestionPayload,
    ) -> Result<Question, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/questions/{}", id)))
            .basic_auth(&auth.username, Some(&auth.password))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_question(
        &self,
        auth: &AdminCredential,
        id: i64,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/questions/{}", id)))
            .basic_auth(&auth.username, Some(&auth.password))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn clear_quiz_stats(&self, auth: &AdminCredential) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url("/api/admin/clear-quiz-stats"))
            .basic_auth(&auth.username, Some(&auth.password))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Rotates the secret key, returning the service's confirmation.
    pub async fn update_secret_key(
        &self,
        auth: &AdminCredential,
        new_key: &str,
    ) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.url("/api/update-secret-key"))
            .basic_auth(&auth.username, Some(&auth.password))
            .json(&serde_json::json!({ "newSecretKey": new_key }))
            .send()
            .await?;
        let body: serde_json::Value = Self::check(response).await?.json().await?;
        Ok(body
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string())
    }
}
