//! Google Gemini `generateContent` client.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ExplanationProvider;
use crate::config::ExplanationConfig;
use crate::error::{BottleneckError, Result};

/// Blocking Gemini client; run it from a worker thread
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    pub(crate) fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    /// Create a client for the configured endpoint and model
    pub fn new(config: &ExplanationConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("bottleneck-solver/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BottleneckError::external_service(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: generate_url(&config.endpoint, &config.model),
            api_key,
            model: config.model.clone(),
        })
    }
}

impl ExplanationProvider for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| BottleneckError::external_service(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BottleneckError::external_service(format!(
                "{} returned HTTP {}",
                self.model, status
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| BottleneckError::external_service(format!("Malformed reply: {}", e)))?;

        parsed
            .text()
            .ok_or_else(|| BottleneckError::external_service("Reply contained no text"))
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}
