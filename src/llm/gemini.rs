//! Google Generative Language API client for text generation.
//!
//! Speaks the REST `generateContent` endpoint.
//! See: <https://ai.google.dev/api/generate-content>
//!
//! Free-tier keys are rate limited (15 requests/min, 1500 requests/day);
//! 429 replies surface as [`CurriculaError::RateLimited`] so callers can
//! tell the user to wait.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::TextGenerator;
use crate::telemetry;
use crate::types::GenerationRequest;
use crate::{CurriculaError, Result};

/// Default base URL for the Generative Language API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Output-token cap sent when the request does not set one.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Client for the Google Generative Language API.
///
/// Constructed once at startup with a validated credential and reused for
/// every call. Performs no retries; wrap it in
/// [`RetryingGenerator`](crate::llm::RetryingGenerator) for that.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the given API key and model.
    ///
    /// An empty key is a configuration error, raised here rather than on
    /// the first call.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Create a client reading the API key from `GOOGLE_API_KEY`.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            CurriculaError::Configuration(format!(
                "{API_KEY_ENV} not found in environment. \
                 Get a key from https://aistudio.google.com/apikey"
            ))
        })?;
        Self::new(api_key, model)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CurriculaError::Configuration(
                "API key is empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| CurriculaError::Http(e.to_string()))?;

        Ok(Self {
            api_key,
            model: model.into(),
            http,
            base_url: base_url.into(),
        })
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Perform one `generateContent` call.
    async fn generate_content(&self, request: &GenerationRequest) -> Result<String> {
        request.validate()?;

        let url = format!(
            "{}/v1beta/{}:generateContent",
            self.base_url,
            self.model_path()
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request
                    .max_output_tokens
                    .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            },
        };

        debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            temperature = request.temperature,
            "dispatching generateContent"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CurriculaError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.classify_failure(status.as_u16(), &body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CurriculaError::Http(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CurriculaError::EmptyResponse);
        }
        Ok(text)
    }

    /// Model resource path for the URL, normalising a bare model name.
    fn model_path(&self) -> String {
        if self.model.contains('/') {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        }
    }

    /// Map a non-success reply to the crate error taxonomy.
    ///
    /// Classification is by HTTP status first, then by the API status
    /// string in the body (the service reports quota exhaustion as
    /// `RESOURCE_EXHAUSTED` and key problems as `UNAUTHENTICATED` or
    /// `API_KEY_INVALID`, sometimes on other status codes).
    fn classify_failure(
        &self,
        status: u16,
        body: &str,
        retry_after: Option<Duration>,
    ) -> CurriculaError {
        let (message, api_status) = parse_error_body(body);

        if status == 429 || api_status == "RESOURCE_EXHAUSTED" || body.contains("RESOURCE_EXHAUSTED")
        {
            return CurriculaError::RateLimited { retry_after };
        }
        if api_status == "UNAUTHENTICATED" || body.contains("API_KEY_INVALID") {
            return CurriculaError::AuthenticationFailed;
        }
        match status {
            401 | 403 => CurriculaError::AuthenticationFailed,
            404 => CurriculaError::ModelNotFound(self.model.clone()),
            _ => CurriculaError::Api { status, message },
        }
    }
}

/// Extract the error message and API status string from a failure body.
///
/// Falls back to the raw body (truncated) when it is not the documented
/// error envelope.
fn parse_error_body(body: &str) -> (String, String) {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body)
        && let Some(error) = envelope.error
        && !error.message.is_empty()
    {
        return (error.message, error.status);
    }
    (body.trim().chars().take(200).collect(), String::new())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let start = Instant::now();
        let result = self.generate_content(request).await;
        record_request("generate", self.name(), start, result.is_ok());
        result
    }
}

/// Record request outcome metrics (counter + histogram).
fn record_request(operation: &'static str, provider: &str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "provider" => provider.to_owned(),
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "provider" => provider.to_owned(),
        "operation" => operation,
    )
    .record(elapsed);
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}
