//! Job summaries: a short promotional blurb from a text-generation provider.
//!
//! The provider sits behind [`TextGenerator`]. [`Summarizer`] builds the
//! prompt, makes exactly one attempt, and reports failure as a
//! [`SummaryError`]. Callers that only need something to show use
//! [`Summarizer::summarize_or_fallback`], which collapses every failure into
//! [`FALLBACK_SUMMARY`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Job;

/// Shown whenever a summary cannot be produced.
pub const FALLBACK_SUMMARY: &str = "Unlock this local opportunity and start earning today!";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const SYSTEM_INSTRUCTION: &str = "You are a professional recruiting assistant for \
    non-office, high-speed jobs. Keep it energetic and brief.";

/// Why a summary could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("no API key configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("provider returned no text")]
    Empty,

    #[error("no job with id {0}")]
    UnknownJob(String),
}

/// One text-generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

/// Something that turns a prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, request: &GenerateRequest) -> Result<String, SummaryError>;
}

/// Prompt asking for a catchy two-sentence pitch of `job`.
pub fn build_prompt(job: &Job) -> String {
    format!(
        "Provide a catchy, 2-sentence summary for this job to attract applicants.\n\
         Job Title: {}\n\
         Category: {}\n\
         Pay: ${}/{}\n\
         Description: {}\n\
         Tags: {}",
        job.title,
        job.category,
        job.pay,
        job.pay_frequency,
        job.description,
        job.tags.join(", "),
    )
}

/// Produces summaries with one generator and model.
pub struct Summarizer<G> {
    generator: G,
    model: String,
}

impl<G: TextGenerator> Summarizer<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// The provider's text for `job`, verbatim. Empty text is an error.
    pub fn summarize(&self, job: &Job) -> Result<String, SummaryError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(job),
        };
        tracing::debug!(job = %job.id, model = %self.model, "requesting summary");

        let text = self.generator.generate(&request)?;
        if text.is_empty() {
            return Err(SummaryError::Empty);
        }
        Ok(text)
    }

    /// Like [`summarize`](Self::summarize), but never fails.
    pub fn summarize_or_fallback(&self, job: &Job) -> String {
        self.summarize(job).unwrap_or_else(|e| {
            tracing::warn!(job = %job.id, error = %e, "summary degraded to fallback");
            FALLBACK_SUMMARY.to_string()
        })
    }
}

// ── Gemini ──

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// A client without a key still constructs; every call then fails with
    /// [`SummaryError::MissingCredential`] before touching the network.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummaryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerateRequest) -> Result<String, SummaryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummaryError::MissingCredential)?;

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&GeminiRequest::from(request))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(SummaryError::Rejected {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        parse_response_text(&body)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

impl<'a> From<&'a GenerateRequest> for GeminiRequest<'a> {
    fn from(request: &'a GenerateRequest) -> Self {
        Self {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: &request.system_instruction,
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ProviderError,
}

/// First text part of the first candidate.
fn parse_response_text(body: &str) -> Result<String, SummaryError> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    // Some failures come back with a 200 and an error object.
    if let Some(error) = response.error {
        return Err(SummaryError::Rejected {
            status: 200,
            message: error.message.unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
        .ok_or(SummaryError::Empty)
}

/// The provider's error message, or the raw body when it has none.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
        .unwrap_or_else(|| body.trim().to_string())
}
