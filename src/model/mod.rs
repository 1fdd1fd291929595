mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::web::models::Message;

pub use openai::OpenAiClient;

pub const MODEL: &str = "gpt-4.1-mini";
pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// A chat-completion backend. Takes the full conversation, system prompt
/// included, and returns the first choice's text.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError>;
}
