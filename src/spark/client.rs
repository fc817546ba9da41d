use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, error, info};

use super::types::{ChatRequest, ChatResponse};
use crate::config::SparkConfig;
use crate::error::{SparkError, SparkResult};

/// Client for the Spark chat-completion endpoint.
///
/// One request per call, no retries: a failed sample is recorded by the
/// experiment loop and the run moves on. The only delay between calls is the
/// fixed pause the loop itself inserts.
#[derive(Clone)]
pub struct SparkClient {
    client: Client,
    base_url: String,
    bearer_token: String,
    model: String,
    timeout_ms: u64,
}

impl SparkClient {
    /// Create a new Spark client
    pub fn new(config: &SparkConfig) -> SparkResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(SparkError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token(),
            model: config.model.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    /// Send one prompt and return the raw completion text.
    pub async fn complete(&self, prompt: &str) -> SparkResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest::probe(&self.model, prompt);

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Spark endpoint");
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SparkError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    SparkError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Spark call failed");
            return Err(SparkError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| SparkError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        let content = chat_response
            .first_content()
            .ok_or_else(|| SparkError::InvalidResponse {
                message: "Response contained no completion choices".to_string(),
            })?;

        info!(
            latency_ms = start.elapsed().as_millis() as u64,
            completion_len = content.len(),
            "Spark call succeeded"
        );

        Ok(content.to_string())
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
