use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Value the front end may send for an optional profile field.
/// Hours arrive as numbers, commitment as a boolean, everything else as text.
/// Objects and arrays are accepted but count as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(Value),
}

impl LooseText {
    fn into_text(self) -> Option<String> {
        let text = match self {
            LooseText::Text(s) => s.trim().to_string(),
            LooseText::Number(n) => n.to_string(),
            LooseText::Flag(b) => b.to_string(),
            LooseText::Other(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Raw request body for plan generation, exactly as the client sent it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Kept untyped so a non-text goal becomes a validation error instead of a decode error.
    pub goal: Option<Value>,
    pub deadline: Option<LooseText>,
    #[serde(alias = "commitment")]
    pub is_committed: Option<LooseText>,
    #[serde(alias = "knowledge")]
    pub know_how: Option<LooseText>,
    pub weekly_goal: Option<LooseText>,
    #[serde(alias = "method")]
    pub how_to_achieve: Option<LooseText>,
    pub daily_hours: Option<LooseText>,
    pub start_time: Option<LooseText>,
    pub end_time: Option<LooseText>,
    pub language: Option<LooseText>,
    pub additional_details: Option<LooseText>,
}

/// A validated user profile. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub goal: String,
    pub deadline: Option<String>,
    pub commitment: Option<String>,
    pub knowledge: Option<String>,
    pub weekly_goal: Option<String>,
    pub method: Option<String>,
    pub daily_hours: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub language: String,
    pub additional_details: Option<String>,
}

impl UserProfile {
    /// Profile with only a goal; every optional field absent.
    pub fn with_goal(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            deadline: None,
            commitment: None,
            knowledge: None,
            weekly_goal: None,
            method: None,
            daily_hours: None,
            start_time: None,
            end_time: None,
            language: DEFAULT_LANGUAGE.to_string(),
            additional_details: None,
        }
    }

    /// Reads the commitment field as a flag. Absent or unrecognised text counts as committed.
    pub fn is_committed(&self) -> bool {
        match self.commitment.as_deref() {
            Some(value) => parse_flag(value).unwrap_or(true),
            None => true,
        }
    }
}

/// Interprets boolean-like text. Returns `None` when the text is not a recognised flag.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "committed" => Some(true),
        "false" | "no" | "n" | "0" | "not committed" => Some(false),
        _ => None,
    }
}

impl TryFrom<PlanRequest> for UserProfile {
    type Error = AppError;

    fn try_from(request: PlanRequest) -> Result<Self, Self::Error> {
        let goal = match request.goal {
            Some(Value::String(goal)) if !goal.trim().is_empty() => goal.trim().to_string(),
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err(AppError::Validation("goal is required".to_string()))
            }
            Some(_) => return Err(AppError::Validation("goal must be text".to_string())),
        };

        let text = |field: Option<LooseText>| field.and_then(LooseText::into_text);

        Ok(UserProfile {
            deadline: text(request.deadline),
            commitment: text(request.is_committed),
            knowledge: text(request.know_how),
            weekly_goal: text(request.weekly_goal),
            method: text(request.how_to_achieve),
            daily_hours: text(request.daily_hours),
            start_time: text(request.start_time),
            end_time: text(request.end_time),
            language: text(request.language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            additional_details: text(request.additional_details),
            ..UserProfile::with_goal(goal)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn profile_from(value: Value) -> Result<UserProfile, AppError> {
        let request: PlanRequest = serde_json::from_value(value).unwrap();
        UserProfile::try_from(request)
    }

    #[test]
    fn test_full_profile_from_front_end_keys() {
        let profile = profile_from(json!({
            "goal": "learn guitar",
            "deadline": "30 days",
            "isCommitted": true,
            "knowHow": "beginner",
            "weeklyGoal": "two songs",
            "howToAchieve": "online lessons",
            "dailyHours": 1.5,
            "startTime": "07:00",
            "endTime": "08:30",
            "language": "es",
            "additionalDetails": "left handed"
        }))
        .unwrap();

        assert_eq!(profile.goal, "learn guitar");
        assert_eq!(profile.deadline.as_deref(), Some("30 days"));
        assert_eq!(profile.commitment.as_deref(), Some("true"));
        assert_eq!(profile.knowledge.as_deref(), Some("beginner"));
        assert_eq!(profile.method.as_deref(), Some("online lessons"));
        assert_eq!(profile.daily_hours.as_deref(), Some("1.5"));
        assert_eq!(profile.language, "es");
        assert_eq!(profile.additional_details.as_deref(), Some("left handed"));
    }

    #[test]
    fn test_aliases_are_accepted() {
        let profile = profile_from(json!({
            "goal": "run a marathon",
            "commitment": "no",
            "knowledge": "intermediate",
            "method": "coach"
        }))
        .unwrap();

        assert_eq!(profile.knowledge.as_deref(), Some("intermediate"));
        assert_eq!(profile.method.as_deref(), Some("coach"));
        assert!(!profile.is_committed());
    }

    #[test]
    fn test_missing_optionals_default() {
        let profile = profile_from(json!({"goal": "  write a book  "})).unwrap();
        assert_eq!(profile, UserProfile::with_goal("write a book"));
        assert_eq!(profile.language, "en");
        assert!(profile.is_committed());
    }

    #[test]
    fn test_blank_optional_text_counts_as_absent() {
        let profile = profile_from(json!({"goal": "x", "deadline": "   ", "language": ""})).unwrap();
        assert!(profile.deadline.is_none());
        assert_eq!(profile.language, "en");
    }

    #[test]
    fn test_structured_optional_values_count_as_absent() {
        let profile = profile_from(json!({
            "goal": "learn guitar",
            "deadline": {},
            "knowHow": ["chords", "scales"],
            "isCommitted": {"value": true}
        }))
        .unwrap();

        assert!(profile.deadline.is_none());
        assert!(profile.knowledge.is_none());
        assert!(profile.commitment.is_none());
    }

    #[test]
    fn test_missing_goal_is_rejected() {
        let err = profile_from(json!({"deadline": "30 days"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "goal is required"));
    }

    #[test]
    fn test_blank_goal_is_rejected() {
        assert!(matches!(
            profile_from(json!({"goal": "   "})),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            profile_from(json!({"goal": null})),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_non_text_goal_is_rejected() {
        let err = profile_from(json!({"goal": 42})).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "goal must be text"));

        let err = profile_from(json!({"goal": ["a"]})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_flag_values() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("not committed"), Some(false));
        assert_eq!(parse_flag("very much"), None);
    }

    #[test]
    fn test_unrecognised_commitment_text_counts_as_committed() {
        let mut profile = UserProfile::with_goal("x");
        profile.commitment = Some("very much".to_string());
        assert!(profile.is_committed());
    }
}
