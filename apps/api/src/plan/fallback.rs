//! Fallback plan — a static, network-free plan built from the goal text alone.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::llm_client::prompts::NOT_SPECIFIED;
use crate::models::plan::{
    BrainProgram, CurrentPlan, DailyRoutine, GeneratedPlan, MainGoal, PlanMeta,
};
use crate::models::profile::UserProfile;

const BENEFITS: &[&str] = &[
    "Clear daily direction toward {goal}",
    "Momentum from small wins you can see every day",
    "Stronger self-discipline and focus",
    "Less stress because you always know the next step",
    "Confidence that carries into the rest of your life",
];

const WHY_THIS_WORKS: &[&str] = &[
    "Repeating a goal morning and night keeps it active in the subconscious mind.",
    "Identity-based affirmations make the new behaviour feel like who you already are.",
    "Short, scheduled daily actions are easier to start than one big effort.",
];

const BURNING_DESIRES: &[&str] = &[
    "I deeply want to achieve {goal}.",
    "I want to prove to myself that I follow through.",
    "I want to feel the pride of reaching {goal}.",
    "I want my daily actions to match my ambitions.",
    "I want to become an example for the people around me.",
    "I want the freedom and confidence that {goal} brings.",
    "I want to look back on this month as the turning point.",
];

const AFFIRMATIONS: &[&str] = &[
    "I am the kind of person who achieves {goal}.",
    "I am disciplined and consistent every day.",
    "I am focused on what matters most.",
    "I am capable of learning anything I commit to.",
    "I am proud of the progress I make daily.",
];

/// One task list per weekday, `day1`..`day7`.
const DAILY_TASKS: [[&str; 3]; 7] = [
    [
        "Morning: read your goal and affirmations aloud",
        "Work block: break {goal} into small milestones",
        "Night: review the day and visualise success",
    ],
    [
        "Morning: read your goal and affirmations aloud",
        "Work block: complete the first milestone for {goal}",
        "Night: write down one thing you learned",
    ],
    [
        "Morning: visualise the finished result for five minutes",
        "Work block: practise the hardest part of {goal}",
        "Night: note what slowed you down",
    ],
    [
        "Morning: read your burning desires",
        "Work block: fix the obstacle you noted yesterday",
        "Night: plan tomorrow's work block",
    ],
    [
        "Morning: read your goal and affirmations aloud",
        "Work block: push one step further on {goal} than before",
        "Night: celebrate one small win",
    ],
    [
        "Morning: visualise the finished result for five minutes",
        "Work block: review everything done this week on {goal}",
        "Night: read your night program",
    ],
    [
        "Morning: rest and reflect on the week",
        "Work block: set the milestones for next week",
        "Night: recommit to {goal} and read your affirmations",
    ],
];

/// Builds a complete plan without calling the model.
///
/// The text depends on `profile.goal` only, so two calls with the same goal
/// differ in `id` and `created_at` and nothing else.
pub fn build_fallback(profile: &UserProfile) -> GeneratedPlan {
    let goal = profile.goal.as_str();
    let fill = |line: &&str| line.replace("{goal}", goal);

    let daily_routine = DAILY_TASKS
        .iter()
        .enumerate()
        .map(|(i, tasks)| {
            let tasks: Vec<Value> = tasks.iter().map(|t| Value::String(fill(t))).collect();
            (format!("day{}", i + 1), tasks)
        })
        .collect::<BTreeMap<_, _>>();

    GeneratedPlan {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        main_goal: MainGoal {
            goal: goal.to_string(),
            deadline: NOT_SPECIFIED.to_string(),
            committed: true,
        },
        plan_meta: PlanMeta {
            plan_goal: format!("Make steady, daily progress toward: {goal}"),
            benefits: BENEFITS.iter().map(fill).collect(),
            why_this_works: WHY_THIS_WORKS.iter().map(fill).collect(),
        },
        current_plan: CurrentPlan {
            brainprogram: BrainProgram {
                morning: format!(
                    "Take three slow breaths. See yourself having already achieved {goal}. \
                    Feel the pride and calm of that moment, then start the day with one action toward it."
                ),
                night: format!(
                    "Before sleep, replay one step you took today toward {goal}. \
                    Tell yourself: I am becoming this person. Let your mind work on it while you rest."
                ),
            },
            burning_desires: BURNING_DESIRES.iter().map(fill).collect(),
            affirmations: AFFIRMATIONS.iter().map(fill).collect(),
            daily_routine: DailyRoutine::Days(daily_routine),
        },
    }
}
