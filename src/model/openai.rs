use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use super::{CompletionGateway, GatewayError, MODEL, TEMPERATURE};
use crate::config::Config;
use crate::web::models::Message;

// Client for an OpenAI-compatible chat completions API
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;

        info!("Using completion provider at: {}", config.base_url);

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn extract_reply(body: &Value) -> Result<String, GatewayError> {
        body.get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GatewayError::MalformedResponse("no content in first choice".to_string())
            })
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);

        let payload = json!({
            "model": MODEL,
            "messages": messages,
            "temperature": TEMPERATURE,
        });

        debug!("Sending {} messages to {}", messages.len(), url);
        debug!("Payload: {}", payload);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!("Failed to read error body from provider: {}", e);
                String::new()
            });
            return Err(GatewayError::Status { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        debug!("Response JSON: {}", body);

        let reply = Self::extract_reply(&body)?;
        info!("Reply length: {} characters", reply.len());
        Ok(reply)
    }
}
