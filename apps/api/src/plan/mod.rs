// Plan generation: profile → prompt → model → normalized plan.
// All model calls go through llm_client; nothing here talks HTTP to the upstream.

pub mod fallback;
#[cfg(test)]
pub mod fixtures;
pub mod generator;
pub mod handlers;
pub mod normalizer;
pub mod prompt_builder;
pub mod prompts;
pub mod scanner;
pub mod schema;
