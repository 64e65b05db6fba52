//! LLM Client — the single point of entry for generative-language calls in Subconic.
//!
//! ARCHITECTURAL RULE: no other module talks to the upstream API directly.
//! Callers go through [`generate`], which bounds every call with the configured
//! timeout and turns empty replies into errors.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
#[cfg(test)]
pub mod mock;
pub mod prompts;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Per-call generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Maximum wall-clock wait before the in-flight call is dropped.
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(90_000),
            temperature: Some(0.7),
            top_p: None,
            max_output_tokens: Some(2000),
        }
    }
}

/// A text-in/text-out generative model.
///
/// Implementations issue exactly one upstream request per call and never retry.
/// `Ok(None)` means the upstream answered successfully but carried no text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Option<String>, LlmError>;

    fn model_name(&self) -> &str;
}

/// Runs one bounded generation call.
///
/// The client future is dropped when `options.timeout` expires, which cancels
/// the in-flight request; no partial text is returned.
pub async fn generate(
    client: &dyn ModelClient,
    prompt: &str,
    options: &GenerationOptions,
) -> Result<String, LlmError> {
    let text = tokio::time::timeout(options.timeout, client.complete(prompt, options))
        .await
        .map_err(|_| LlmError::Timeout(options.timeout))??;

    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LlmError::EmptyContent),
    }
}
