use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Fixed-shape plan returned to the caller.
///
/// `id`, `created_at` and `main_goal.goal` are attached by the server; the rest
/// comes from the model or from the fallback generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub main_goal: MainGoal,
    pub plan_meta: PlanMeta,
    pub current_plan: CurrentPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainGoal {
    pub goal: String,
    pub deadline: String,
    pub committed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    pub plan_goal: String,
    pub benefits: Vec<String>,
    pub why_this_works: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlan {
    pub brainprogram: BrainProgram,
    /// Seven lines requested; whatever the model produced is kept as-is.
    pub burning_desires: Vec<String>,
    /// Five lines requested; whatever the model produced is kept as-is.
    pub affirmations: Vec<String>,
    pub daily_routine: DailyRoutine,
}

/// Two-part mental priming text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainProgram {
    pub morning: String,
    pub night: String,
}

/// A day-indexed task list (`day1`..`day7`), a free-text guide, or whatever
/// other shape the model chose. Any non-null routine is passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DailyRoutine {
    /// Tasks are passed through verbatim: plain strings or `{time, task}` objects.
    Days(BTreeMap<String, Vec<Value>>),
    Guide(String),
    Other(Value),
}

/// The part of a plan the model is responsible for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBody {
    #[serde(default)]
    pub main_goal: Option<ModelGoal>,
    pub plan_meta: PlanMeta,
    pub current_plan: CurrentPlan,
}

/// Goal metadata as restated by the model. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelGoal {
    #[serde(default)]
    pub deadline: Option<Value>,
    #[serde(default)]
    pub committed: Option<Value>,
}
