//! Summarizer client: sends extracted article text to the hosted inference
//! endpoint and returns the generated summary.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::config::AppConfig;
use crate::errors::SummarizeError;
use crate::prompt::{MAX_OUTPUT_TOKENS, build_summary_prompt};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Seam for summary generation so tests can substitute a stub for the remote
/// endpoint.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a summary of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::ModelInvocation`] when the remote call fails
    /// or the response has an unexpected shape.
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Client for a Messages-API inference endpoint.
///
/// Construct once per process and share across requests; the client holds no
/// per-request state.
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    model_id: String,
    api_key: String,
}

impl InferenceClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.inference_url.clone(),
            model_id: config.model_id.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let prompt = build_summary_prompt(text);

        let request_body = json!({
            "model": self.model_id,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        info!("Invoking model {}", self.model_id);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::ModelInvocation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::ModelInvocation(provider_error_message(
                status.as_u16(),
                &error_text,
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::ModelInvocation(format!("failed to parse response: {}", e))
        })?;

        let summary = response_json
            .get("content")
            .and_then(|c| c.as_array())
            .and_then(|items| items.first())
            .and_then(|item| item.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                SummarizeError::ModelInvocation("no text in response".to_string())
            })?;

        Ok(summary.to_string())
    }
}

/// Prefer the provider's own error message when the error body parses as the
/// documented `{"error": {"type", "message"}}` shape.
fn provider_error_message(status: u16, error_text: &str) -> String {
    let detail = serde_json::from_str::<Value>(error_text)
        .ok()
        .and_then(|body| {
            let error = body.get("error")?;
            let kind = error.get("type")?.as_str()?.to_string();
            let message = error.get("message")?.as_str()?.to_string();
            Some(format!("{} - {}", kind, message))
        })
        .unwrap_or_else(|| error_text.to_string());

    format!("status {}: {}", status, detail)
}
