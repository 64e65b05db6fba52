//! Output Normalizer — turns raw model text into a `GeneratedPlan` or a `NormalizationError`.
//!
//! Two phases:
//! 1. the scanner (see `scanner.rs`) locates a candidate span heuristically;
//! 2. this module decodes that span strictly, checks the schema's required
//!    fields and attaches request metadata.
//!
//! There is no repair pass. A span that fails to decode is a failure, and a
//! plan is never returned with a required field missing.

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::prompts::NOT_SPECIFIED;
use crate::models::plan::{GeneratedPlan, MainGoal, PlanBody};
use crate::models::profile::{parse_flag, UserProfile};
use crate::plan::scanner::{
    list_items, locate_json_span, split_sections, strip_code_fences, Section,
};
use crate::plan::schema::{PlanFormat, PlanSchema, SECTION_DELIMITER};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationFailure {
    #[error("no payload found in model output")]
    NoPayload,

    #[error("payload is not valid JSON: {0}")]
    Decode(String),

    #[error("required field `{0}` is missing or null")]
    MissingField(String),

    #[error("payload does not match the plan shape: {0}")]
    Shape(String),
}

/// A failed normalization. Carries the raw model text for diagnostic logging;
/// `Display` never includes it.
#[derive(Debug, Error)]
#[error("{failure}")]
pub struct NormalizationError {
    pub failure: NormalizationFailure,
    raw_text: String,
}

impl NormalizationError {
    pub fn new(failure: NormalizationFailure, raw_text: impl Into<String>) -> Self {
        Self {
            failure,
            raw_text: raw_text.into(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Normalizes one model answer against the active schema.
pub fn normalize(
    raw_text: &str,
    profile: &UserProfile,
    schema: &PlanSchema,
) -> Result<GeneratedPlan, NormalizationError> {
    let fail = |failure| NormalizationError::new(failure, raw_text);

    let payload = extract_payload(raw_text, schema.format).map_err(fail)?;
    check_required(&payload, schema.required_fields).map_err(fail)?;

    let body: PlanBody = serde_json::from_value(payload)
        .map_err(|e| fail(NormalizationFailure::Shape(e.to_string())))?;

    Ok(enrich(body, profile))
}

/// Locates and strictly decodes the payload. The result is always a JSON object.
pub fn extract_payload(raw_text: &str, format: PlanFormat) -> Result<Value, NormalizationFailure> {
    match format {
        PlanFormat::Structured => decode_structured(raw_text),
        PlanFormat::Sectioned => decode_sectioned(raw_text),
    }
}

fn decode_structured(raw_text: &str) -> Result<Value, NormalizationFailure> {
    let span =
        locate_json_span(strip_code_fences(raw_text)).ok_or(NormalizationFailure::NoPayload)?;
    serde_json::from_str::<Value>(span)
        .map_err(|e| NormalizationFailure::Decode(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Sectioned output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum SectionKind {
    Text,
    List,
}

/// Heading keyword → plan path. First match wins, so more specific keywords
/// come before GOAL.
const SECTION_ROUTES: &[(&[&str], &str, SectionKind)] = &[
    (&["MORNING"], "currentPlan.brainprogram.morning", SectionKind::Text),
    (&["NIGHT", "EVENING"], "currentPlan.brainprogram.night", SectionKind::Text),
    (&["DESIRE"], "currentPlan.burningDesires", SectionKind::List),
    (&["AFFIRMATION"], "currentPlan.affirmations", SectionKind::List),
    (&["BENEFIT"], "planMeta.benefits", SectionKind::List),
    (&["WHY"], "planMeta.whyThisWorks", SectionKind::List),
    (&["DAILY", "ROUTINE", "GUIDE"], "currentPlan.dailyRoutine", SectionKind::Text),
    (&["GOAL"], "planMeta.planGoal", SectionKind::Text),
];

fn decode_sectioned(raw_text: &str) -> Result<Value, NormalizationFailure> {
    let cleaned = strip_code_fences(raw_text);
    let sections = split_sections(cleaned, SECTION_DELIMITER);
    if sections.is_empty() {
        return Err(NormalizationFailure::NoPayload);
    }

    let mut payload = Value::Object(Map::new());
    let mut routed = 0;

    for section in &sections {
        let Some((path, kind)) = route_section(section) else {
            continue;
        };
        // A fence closing the whole answer ends up in the last body.
        let body = strip_code_fences(section.body);
        // Repeated headings: keep the first occurrence.
        if lookup(&payload, path).is_some() || body.is_empty() {
            continue;
        }
        let value = match kind {
            SectionKind::Text => Value::String(body.to_string()),
            SectionKind::List => Value::from(list_items(body)),
        };
        insert_at(&mut payload, path, value);
        routed += 1;
    }

    if routed == 0 {
        return Err(NormalizationFailure::NoPayload);
    }
    Ok(payload)
}

fn route_section(section: &Section<'_>) -> Option<(&'static str, SectionKind)> {
    let heading = section.heading.to_uppercase();
    SECTION_ROUTES
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| heading.contains(*k)))
        .map(|(_, path, kind)| (*path, *kind))
}

// ────────────────────────────────────────────────────────────────────────────
// Schema fill + enrichment
// ────────────────────────────────────────────────────────────────────────────

/// Every required dotted path must resolve to a non-null value. List lengths
/// are not checked: a model that returns 6 desires instead of 7 still passes.
fn check_required(payload: &Value, required: &[&str]) -> Result<(), NormalizationFailure> {
    match required
        .iter()
        .find(|path| lookup(payload, path).map_or(true, Value::is_null))
    {
        Some(path) => Err(NormalizationFailure::MissingField(path.to_string())),
        None => Ok(()),
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

fn insert_at(root: &mut Value, path: &str, value: Value) {
    let mut keys: Vec<&str> = path.split('.').collect();
    let Some(last) = keys.pop() else {
        return;
    };

    let mut current = root;
    for key in keys {
        let Value::Object(map) = current else {
            return;
        };
        current = map
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Value::Object(map) = current {
        map.insert(last.to_string(), value);
    }
}

/// Attaches request-scoped metadata the model does not produce.
///
/// The goal is always the user's own text. Deadline and commitment prefer what
/// the user supplied, then the model's restatement, then a fixed default.
fn enrich(body: PlanBody, profile: &UserProfile) -> GeneratedPlan {
    let model_goal = body.main_goal.unwrap_or_default();

    let deadline = profile
        .deadline
        .clone()
        .or_else(|| {
            model_goal
                .deadline
                .as_ref()
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let committed = match profile.commitment {
        Some(_) => profile.is_committed(),
        None => model_goal
            .committed
            .as_ref()
            .and_then(flag_from_value)
            .unwrap_or(true),
    };

    GeneratedPlan {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        main_goal: MainGoal {
            goal: profile.goal.clone(),
            deadline,
            committed,
        },
        plan_meta: body.plan_meta,
        current_plan: body.current_plan,
    }
}

fn flag_from_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => parse_flag(text),
        _ => None,
    }
}
