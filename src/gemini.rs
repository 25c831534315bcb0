//! HTTP client for the Google Generative Language API.
//!
//! Two generation modes are used: free text for the client-base summary and
//! JSON constrained by a declared response schema for sample generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failure of the generative gateway. Advisory features degrade to fallback
/// output on these instead of failing the page.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Abstraction over the text-generation endpoint so services can be tested
/// against a mock gateway.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerativeGateway: Send + Sync {
    /// Free-text generation. `None` when the model produced no candidates.
    async fn generate_text(&self, prompt: &str) -> GenerationResult<Option<String>>;

    /// Structured generation: the reply is requested as JSON conforming to
    /// `schema` and returned as the raw body text.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> GenerationResult<String>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn generate(&self, request: &GenerateContentRequest) -> GenerationResult<Option<String>> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty());

        Ok(text)
    }
}

#[async_trait::async_trait]
impl GenerativeGateway for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> GenerationResult<Option<String>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: None,
        };
        self.generate(&request).await
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> GenerationResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            }),
        };
        Ok(self.generate(&request).await?.unwrap_or_default())
    }
}
