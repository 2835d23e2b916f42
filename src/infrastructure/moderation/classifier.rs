use async_trait::async_trait;
use thiserror::Error;

/// Why one classifier attempt failed. Every variant is retryable.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier request failed: {0}")]
    Transport(String),
    #[error("classifier returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("classifier returned an empty response")]
    EmptyResponse,
    #[error("classifier output is not valid JSON: {0}")]
    Malformed(String),
    #[error("classifier output violates the response schema: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        ClassifierError::Transport(err.to_string())
    }
}

/// External text classifier. One call is one attempt; retries belong to the
/// caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModerationClassifier: Send + Sync {
    /// Sends the full prompt and returns the raw JSON text of the answer.
    async fn classify(&self, prompt: &str) -> Result<String, ClassifierError>;
}
