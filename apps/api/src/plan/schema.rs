//! Plan schemas — which template the model gets and which fields its answer must carry.

use std::fmt;
use std::str::FromStr;

use crate::plan::prompts::{SECTIONED_PROMPT_TEMPLATE, STRUCTURED_PROMPT_TEMPLATE};

/// Token that opens every section in sectioned model output.
pub const SECTION_DELIMITER: &str = "###";

/// Fields the model must produce, as dotted paths into the plan JSON.
/// `mainGoal` is not listed: the server fills it from the profile.
pub const REQUIRED_PLAN_FIELDS: &[&str] = &[
    "planMeta.planGoal",
    "planMeta.benefits",
    "planMeta.whyThisWorks",
    "currentPlan.brainprogram.morning",
    "currentPlan.brainprogram.night",
    "currentPlan.burningDesires",
    "currentPlan.affirmations",
    "currentPlan.dailyRoutine",
];

/// How the model is asked to shape its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    /// One JSON object, located by brace scanning.
    Structured,
    /// `###`-delimited prose sections, routed by heading keywords.
    Sectioned,
}

impl FromStr for PlanFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(PlanFormat::Structured),
            "sectioned" | "sections" => Ok(PlanFormat::Sectioned),
            other => Err(format!(
                "unknown plan format '{other}' (expected 'structured' or 'sectioned')"
            )),
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanFormat::Structured => write!(f, "structured"),
            PlanFormat::Sectioned => write!(f, "sectioned"),
        }
    }
}

/// The active schema: prompt template plus the fields the normalizer insists on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSchema {
    pub format: PlanFormat,
    pub template: &'static str,
    pub required_fields: &'static [&'static str],
}

impl PlanSchema {
    pub fn for_format(format: PlanFormat) -> Self {
        let template = match format {
            PlanFormat::Structured => STRUCTURED_PROMPT_TEMPLATE,
            PlanFormat::Sectioned => SECTIONED_PROMPT_TEMPLATE,
        };
        Self {
            format,
            template,
            required_fields: REQUIRED_PLAN_FIELDS,
        }
    }
}
