// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Instruction block that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Generate ONLY valid JSON.
No markdown.
No explanation.
No extra text.";

/// Placeholder rendered for any optional profile field the user left out.
pub const NOT_SPECIFIED: &str = "Not specified";
