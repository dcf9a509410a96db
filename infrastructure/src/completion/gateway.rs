//! OpenAI-compatible completion gateway
//!
//! Implements [`CompletionGateway`] over `POST {base}/chat/completions`.
//! One request per call, no retries; every failure becomes a
//! [`CompletionResult::Failure`].

use super::error::CompletionError;
use super::types::{ChatMessage, ChatRequest, ChatResponseRaw};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use stagewise_application::CompletionGateway;
use stagewise_domain::{CompletionRequest, CompletionResult, Model};
use std::time::Instant;
use tracing::{debug, warn};

/// Connection settings for the completion endpoint.
///
/// Read once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: Model,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: Model::default(),
            max_tokens: 128,
        }
    }
}

impl CompletionSettings {
    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Completion gateway backed by an OpenAI-compatible HTTP API.
#[derive(Clone)]
pub struct OpenAiCompletionGateway {
    http_client: Client,
    settings: CompletionSettings,
}

impl OpenAiCompletionGateway {
    pub fn new(settings: CompletionSettings) -> Result<Self, CompletionError> {
        if settings.base_url.trim().is_empty() {
            return Err(CompletionError::Config("API base URL is empty".to_string()));
        }
        if settings.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            warn!("No API key configured; requests will be sent without authorization");
        }
        let http_client = Client::builder()
            .build()
            .map_err(|e| CompletionError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Body sent for a request.
    pub fn build_body(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.as_str().to_string(),
            messages: vec![
                ChatMessage::system(request.system_prompt()),
                ChatMessage::user(request.prompt()),
            ],
            temperature: request.temperature(),
            max_tokens: self.settings.max_tokens,
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<(String, String), CompletionError> {
        let start = Instant::now();

        let mut builder = self
            .http_client
            .post(self.settings.endpoint())
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(request.timeout())
            .json(&self.build_body(request));

        if let Some(key) = self.settings.api_key.as_deref()
            && !key.trim().is_empty()
        {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Completion request failed");
            if e.is_timeout() {
                CompletionError::Timeout(e.to_string())
            } else {
                CompletionError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(e.to_string())
            } else {
                CompletionError::Network(e.to_string())
            }
        })?;

        if status != StatusCode::OK {
            let diagnostic = diagnostic_from_body(&body);
            warn!(status = %status, error = %diagnostic, "Completion API error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                diagnostic,
            });
        }

        let text = parse_success_body(&body)?;

        debug!(
            model = %self.settings.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok((text, body))
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult {
        match self.send(request).await {
            Ok((text, body)) => CompletionResult::success_with_body(text, body),
            Err(e) => e.into(),
        }
    }
}

/// First choice's message text from a 200 body.
pub fn parse_success_body(body: &str) -> Result<String, CompletionError> {
    serde_json::from_str::<ChatResponseRaw>(body)
        .map(ChatResponseRaw::first_text)
        .map_err(|e| CompletionError::Parse(e.to_string()))
}

/// Best-effort description of a failed response.
///
/// Prefers `error.message` from a JSON error body, then the compact JSON
/// itself, then the raw text.
pub fn diagnostic_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| json.to_string()),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
