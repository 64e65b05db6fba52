//! Axum route handlers for the Plan API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::plan::GeneratedPlan;
use crate::models::profile::{PlanRequest, UserProfile};
use crate::plan::generator::generate_plan;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub success: bool,
    pub plan: GeneratedPlan,
}

/// POST /api/generate-plan
///
/// Validates the profile, runs the generation pipeline and wraps the plan in a
/// success envelope. Invalid input is rejected before any upstream call.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected plan request: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;

    let profile = UserProfile::try_from(request).map_err(|e| {
        warn!("Rejected plan request: {e}");
        e
    })?;

    info!("Accepted plan request for goal {:?}", profile.goal);

    match generate_plan(state.llm.as_ref(), &profile, &state.settings).await {
        Ok(outcome) => {
            info!(
                "Plan {} ready for goal {:?} (source: {})",
                outcome.plan.id, profile.goal, outcome.source
            );
            Ok(Json(PlanResponse {
                success: true,
                plan: outcome.plan,
            }))
        }
        Err(e) => {
            warn!(
                "Plan generation failed for goal {:?} ({}): {e}",
                profile.goal,
                e.kind()
            );
            Err(e)
        }
    }
}
