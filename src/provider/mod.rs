use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;

use crate::web::models::Message;

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// A thin client for the Anthropic Messages API.
///
/// Constructed once at startup and handed to request handlers, so tests can
/// point it at a mock server instead.
pub struct ClaudeClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl ClaudeClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, max_tokens: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens,
            client: Client::new(),
        }
    }

    /// Builds a client from the environment. A missing API key is not an
    /// error here; it surfaces when the first call is attempted.
    pub fn from_env() -> Self {
        let base_url =
            env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| ANTHROPIC_API_URL.to_string());
        let api_key = env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        let model = env::var("CLAUDE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = env::var("MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        info!("Using Anthropic API at: {}", base_url);
        info!("Model: {} (max_tokens: {})", model, max_tokens);

        Self::new(&base_url, &api_key, &model, max_tokens)
    }

    /// Sends the conversation to the model and returns the first text
    /// segment of the reply. The messages are forwarded in order, verbatim.
    pub async fn complete(&self, messages: &[Message]) -> Result<String> {
        info!(
            "Sending {} message(s) to {} (max_tokens: {})",
            messages.len(),
            self.model,
            self.max_tokens
        );

        let payload = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": messages,
        });
        debug!("Payload: {}", payload);

        let url = format!("{}/v1/messages", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API returned error: {} - {}",
                status,
                error_text
            ));
        }

        let body: Value = response.json().await?;
        debug!("Response JSON: {}", body);

        let text = body["content"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Response missing expected content"))?;

        info!("Response length: {} characters", text.len());
        Ok(text.to_string())
    }
}
