use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use studyplan_core::scheduling::calendar::{self, Grid, GroupedBlocks};
use uuid::Uuid;

use crate::{handlers::load_plan_or_not_found, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_grid(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Grid>, AppError> {
    let plan = load_plan_or_not_found(&state, id).await?;
    Ok(Json(calendar::to_grid(&plan)))
}

#[axum::debug_handler]
pub async fn get_day(
    State(state): State<Arc<ApiState>>,
    Path((id, date)): Path<(Uuid, NaiveDate)>,
) -> Result<Json<GroupedBlocks>, AppError> {
    let plan = load_plan_or_not_found(&state, id).await?;
    Ok(Json(calendar::day_view(&plan, date)))
}
