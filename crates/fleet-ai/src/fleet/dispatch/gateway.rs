//! Outbound boundary to the completion model.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GeminiConfig;

const REQUEST_TIMEOUT_SECS: u64 = 15;
const TEMPERATURE: f32 = 0.5;
const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Text returned when the model answers without any candidate content.
pub const EMPTY_COMPLETION_FALLBACK: &str = "Nessuna risposta dall'AI.";

/// Prompt pair handed to the completion backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub user_prompt: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("completion credential is not configured")]
    MissingCredential,
    #[error("completion endpoint returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("completion transport failed: {0}")]
    Transport(String),
    #[error("completion response could not be decoded: {0}")]
    MalformedResponse(String),
}

/// Boundary to the external completion model. `ensure_configured` runs as a
/// pre-flight, before any snapshot evaluation or prompt assembly.
#[async_trait]
pub trait CompletionGateway: fmt::Debug + Send + Sync {
    fn ensure_configured(&self) -> Result<(), GatewayError>;

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

/// Retry budget for the upstream call. Only transport failures are retried;
/// a non-2xx answer is final on the first attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_backoff_ms: 120,
        }
    }
}

/// Client for the Gemini `generateContent` REST surface.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    retry: RetryPolicy,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_retry(config, RetryPolicy::default())
    }

    pub fn with_retry(config: GeminiConfig, retry: RetryPolicy) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            config,
            retry,
        }
    }

    fn request_url(&self, key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model,
            key
        )
    }
}

// The config holds the API key; keep it out of debug output.
impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionGateway for GeminiClient {
    fn ensure_configured(&self) -> Result<(), GatewayError> {
        if self
            .config
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            return Err(GatewayError::MissingCredential);
        }
        Ok(())
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let Some(key) = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
        else {
            return Err(GatewayError::MissingCredential);
        };
        let url = self.request_url(key);
        let body = GenerateContentRequest {
            system_instruction: InstructionParts {
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.user_prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.http.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    let payload = response
                        .json::<GenerateContentResponse>()
                        .await
                        .map_err(|err| GatewayError::MalformedResponse(err.to_string()))?;
                    return Ok(extract_text(payload));
                }
                // A decoded HTTP error is final, whatever the retry budget.
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().await.unwrap_or_default();
                    return Err(GatewayError::Upstream { status, body });
                }
                Err(err) if attempt >= self.retry.max_attempts => {
                    return Err(GatewayError::Transport(err.to_string()));
                }
                Err(err) => {
                    warn!(attempt, error = %err, "completion transport failed, retrying");
                }
            }
            let backoff = self.retry.base_backoff_ms.saturating_mul(u64::from(attempt));
            tokio::time::sleep(Duration::from_millis(backoff)).await;
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: InstructionParts<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct InstructionParts<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// First candidate, first part; anything less yields the fallback text.
pub(crate) fn extract_text(response: GenerateContentResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text)
        .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string())
}
