// src/groq/client.rs
use crate::groq::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::utils::error::GroqError;
use std::time::Duration;

const GROQ_API_BASE: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
const USER_AGENT: &str = concat!("editorial_extractor/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin client for Groq's OpenAI-compatible chat completions API.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    /// Builds a client reading the API key from the `GROQ_API_KEY`
    /// environment variable.
    pub fn from_env(model: &str) -> Result<Self, GroqError> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| GroqError::MissingApiKey)?;
        Self::new(api_key, model.to_string())
    }

    pub fn new(api_key: String, model: String) -> Result<Self, GroqError> {
        Self::with_base_url(api_key, model, GROQ_API_BASE.to_string())
    }

    /// Same as `new` but against an arbitrary base URL (used by tests to
    /// point the client at a local mock server).
    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, GroqError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model,
            base_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one user prompt and returns the assistant's reply verbatim.
    pub async fn complete(&self, prompt: &str) -> Result<String, GroqError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);
        tracing::debug!("Requesting completion from {} (model {})", url, self.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?; // Propagates reqwest::Error as GroqError::Network

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} from completions endpoint", status);
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Received 429 Too Many Requests - slow down or raise limits.");
                return Err(GroqError::RateLimited);
            }
            return Err(GroqError::Http(status));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GroqError::EmptyResponse)?;

        tracing::debug!("Received completion ({} bytes)", content.len());
        Ok(content)
    }
}
