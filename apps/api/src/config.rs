use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::llm_client::GenerationOptions;
use crate::plan::generator::FailurePolicy;
use crate::plan::schema::PlanFormat;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup aborts if a required variable is missing or a value fails to parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub timeout_ms: u64,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
    /// Selects the prompt template and its required-field list.
    pub plan_format: PlanFormat,
    /// What to do when the model call or normalization fails. Applies to every request.
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            timeout_ms: env_or("PLAN_TIMEOUT_MS", 90_000)?,
            temperature: env_or("PLAN_TEMPERATURE", 0.7)?,
            top_p: optional_env("PLAN_TOP_P")?,
            max_output_tokens: env_or("PLAN_MAX_OUTPUT_TOKENS", 2000)?,
            plan_format: env_or("PLAN_FORMAT", PlanFormat::Structured)?,
            failure_policy: env_or("PLAN_FAILURE_POLICY", FailurePolicy::Error)?,
        })
    }

    /// Sampling and timeout options forwarded to the model client on every call.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            timeout: Duration::from_millis(self.timeout_ms),
            temperature: Some(self.temperature),
            top_p: self.top_p,
            max_output_tokens: Some(self.max_output_tokens),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("Environment variable '{key}' is invalid: {e}")),
        _ => Ok(None),
    }
}
