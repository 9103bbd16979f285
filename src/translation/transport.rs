//! Outbound transport for generation requests.
//!
//! The client only needs "send this prompt, give me status and body"; keeping
//! that behind a trait lets tests swap in a fake without touching the network.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::TransportError;
use super::gemini::GenerateContentRequest;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status and body of whatever the service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait GenerationTransport: Send + Sync {
    /// Sends one prompt and returns the raw HTTP answer.
    ///
    /// Any HTTP status is a successful send; only failures to obtain a
    /// response at all are errors.
    async fn send_generation_request(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<RawResponse, TransportError>;
}

/// Gemini `generateContent` over HTTPS.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    model: String,
    timeout_secs: u64,
}

impl HttpTransport {
    pub fn new(endpoint: String, model: String, timeout_secs: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            model,
            timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn classify(&self, url: &str, err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout_secs)
        } else if err.is_connect() {
            TransportError::Connect {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl GenerationTransport for HttpTransport {
    async fn send_generation_request(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<RawResponse, TransportError> {
        let url = self.url();
        debug!(%url, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Accept", "application/json")
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.classify(&url, &e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(&url, &e))?;
        debug!(status, body_len = body.len(), "received generateContent response");

        Ok(RawResponse { status, body })
    }
}
