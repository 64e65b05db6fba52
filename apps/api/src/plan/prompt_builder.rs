//! Prompt Builder — fills the active template with the user's profile.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NOT_SPECIFIED};
use crate::models::profile::UserProfile;
use crate::plan::schema::PlanSchema;

/// Builds the prompt for one plan request. Never fails: every absent optional
/// field renders as "Not specified".
pub fn build_prompt(profile: &UserProfile, schema: &PlanSchema) -> String {
    fill_template(
        schema.template,
        &[
            ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ("goal", profile.goal.as_str()),
            ("deadline", or_default(&profile.deadline)),
            ("committed", or_default(&profile.commitment)),
            ("knowledge", or_default(&profile.knowledge)),
            ("weekly_goal", or_default(&profile.weekly_goal)),
            ("method", or_default(&profile.method)),
            ("daily_hours", or_default(&profile.daily_hours)),
            ("start_time", or_default(&profile.start_time)),
            ("end_time", or_default(&profile.end_time)),
            ("language", profile.language.as_str()),
            ("additional_details", or_default(&profile.additional_details)),
        ],
    )
}

fn or_default(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_SPECIFIED)
}

/// Replaces `{key}` tokens in a single pass, so user text that happens to
/// contain `{goal}` is copied literally instead of being expanded again.
/// Braces that do not open a known key are kept as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let matched = values.iter().find_map(|(key, value)| {
            tail.strip_prefix(*key)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });

        match matched {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
