//! Gemini backend -- structured JSON generation via the `generateContent` REST API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::traits::{ContentGenerator, GenerationRequest};
use crate::error::{AnalysisFailure, Result};
use crate::storage::{credentials, AnalysisSettings};

pub struct GeminiGenerator {
    http_client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiGenerator {
    /// Build a generator with an explicit API key.
    pub fn new(settings: &AnalysisSettings, api_key: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(AnalysisFailure::Transport)?;

        Ok(Self {
            http_client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// Build a generator, resolving the API key from the environment or the OS keyring.
    pub fn from_settings(settings: &AnalysisSettings) -> Result<Self> {
        let api_key = credentials::resolve_api_key(&settings.api_key_env).ok_or_else(|| {
            AnalysisFailure::MissingCredentials {
                env_var: settings.api_key_env.clone(),
            }
        })?;
        Self::new(settings, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

impl ContentGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, AnalysisFailure> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": &request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": &request.response_schema,
            }
        });

        tracing::debug!(model = %self.model, "sending generateContent request");

        let resp = self
            .http_client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(AnalysisFailure::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&text).map_err(AnalysisFailure::MalformedPayload)?;

        envelope.into_text().ok_or(AnalysisFailure::EmptyResponse)
    }
}
