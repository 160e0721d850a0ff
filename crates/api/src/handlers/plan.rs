use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use studyplan_core::{
    errors::PlanError,
    models::{
        requests::{CreatePlanRequest, DeletedResponse},
        study_plan::StudyPlan,
    },
};
use tracing::info;
use uuid::Uuid;

use crate::{handlers::load_plan_or_not_found, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_plan(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<Json<StudyPlan>, AppError> {
    // Bounds are fixed for the plan's lifetime, so reject bad ones up front
    StudyPlan::check_range(payload.start_date, payload.end_date)?;

    if payload.title.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Plan title must not be empty".to_string(),
        )));
    }

    let row = studyplan_db::repositories::study_plan::create_study_plan(
        &state.db_pool,
        &payload.title,
        &payload.description,
        payload.start_date,
        payload.end_date,
    )
    .await
    .map_err(PlanError::Database)?;

    info!("Created study plan {} ({})", row.id, row.title);
    Ok(Json(row.into_plan(Vec::new())?))
}

#[axum::debug_handler]
pub async fn get_plan(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudyPlan>, AppError> {
    let plan = load_plan_or_not_found(&state, id).await?;
    Ok(Json(plan))
}

#[axum::debug_handler]
pub async fn delete_plan(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = studyplan_db::repositories::study_plan::delete_study_plan(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Study plan with ID {} not found",
            id
        ))));
    }

    info!("Deleted study plan {} and its blocks", id);
    Ok(Json(DeletedResponse {
        id,
        deleted_at: Utc::now(),
    }))
}
