use std::sync::Arc;

use crate::llm_client::ModelClient;
use crate::plan::generator::PlanSettings;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request works on its own profile and plan.
#[derive(Clone)]
pub struct AppState {
    /// Upstream model. `GeminiClient` in production, a scripted stand-in in tests.
    pub llm: Arc<dyn ModelClient>,
    pub settings: Arc<PlanSettings>,
}
