pub mod blocks;
pub mod calendar;
pub mod plan;

use studyplan_core::{errors::PlanError, models::study_plan::StudyPlan};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Loads a plan with its blocks, or a 404.
pub(crate) async fn load_plan_or_not_found(state: &ApiState, id: Uuid) -> Result<StudyPlan, AppError> {
    studyplan_db::load_plan(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?
        .ok_or_else(|| AppError(PlanError::NotFound(format!("Study plan with ID {} not found", id))))
}
