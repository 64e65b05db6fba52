//! Plan generation pipeline.
//!
//! Flow: build_prompt → llm_client::generate (bounded by timeout) → normalize →
//!       fallback substitution when the deployment's policy asks for it.
//!
//! One upstream call per request. Nothing is retried.

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{generate, GenerationOptions, ModelClient};
use crate::models::plan::GeneratedPlan;
use crate::models::profile::UserProfile;
use crate::plan::fallback::build_fallback;
use crate::plan::normalizer::normalize;
use crate::plan::prompt_builder::build_prompt;
use crate::plan::schema::PlanSchema;

/// What happens when the model call or normalization fails.
/// Chosen once per deployment, never per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Surface the failure: 504 on timeout, 500 otherwise.
    Error,
    /// Answer with the deterministic fallback plan instead.
    Fallback,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(FailurePolicy::Error),
            "fallback" => Ok(FailurePolicy::Fallback),
            other => Err(format!(
                "unknown failure policy '{other}' (expected 'error' or 'fallback')"
            )),
        }
    }
}

/// Where the returned plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Model,
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanSource::Model => write!(f, "model"),
            PlanSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Deployment-wide settings for the pipeline, built once at startup.
#[derive(Debug, Clone)]
pub struct PlanSettings {
    pub schema: PlanSchema,
    pub options: GenerationOptions,
    pub failure_policy: FailurePolicy,
}

impl PlanSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            schema: PlanSchema::for_format(config.plan_format),
            options: config.generation_options(),
            failure_policy: config.failure_policy,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan: GeneratedPlan,
    pub source: PlanSource,
}

/// Runs the pipeline for one validated profile.
pub async fn generate_plan(
    llm: &dyn ModelClient,
    profile: &UserProfile,
    settings: &PlanSettings,
) -> Result<PlanOutcome, AppError> {
    let prompt = build_prompt(profile, &settings.schema);

    info!(
        "Requesting plan from {} ({} format)",
        llm.model_name(),
        settings.schema.format
    );

    let result = match generate(llm, &prompt, &settings.options).await {
        Ok(raw) => normalize(&raw, profile, &settings.schema).map_err(|e| {
            warn!(
                "Model output could not be normalized ({e}). Raw output:\n{}",
                e.raw_text()
            );
            AppError::from(e)
        }),
        Err(e) => Err(AppError::from(e)),
    };

    match (result, settings.failure_policy) {
        (Ok(plan), _) => Ok(PlanOutcome {
            plan,
            source: PlanSource::Model,
        }),
        (Err(err), FailurePolicy::Fallback) => {
            warn!(
                "Plan generation failed ({}: {err}), substituting fallback plan",
                err.kind()
            );
            Ok(PlanOutcome {
                plan: build_fallback(profile),
                source: PlanSource::Fallback,
            })
        }
        (Err(err), FailurePolicy::Error) => Err(err),
    }
}
