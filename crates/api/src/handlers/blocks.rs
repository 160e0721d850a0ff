//! # Time Block Handlers
//!
//! Proposals arrive here from the manual entry form and from the block
//! generator alike; both are treated as untrusted. The stored plan is loaded,
//! proposals are reconciled against it with the current time, and only the
//! accepted subset is written back. The response lists every rejection with
//! its reason so the client can let the user fix or drop individual entries.
//!
//! Each plan is assumed to have a single writer at a time. Two concurrent
//! batches for the same plan are each validated against the blocks stored
//! before either of them commits.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use studyplan_core::{
    errors::PlanError,
    models::{
        report::ValidationReport,
        requests::{DeletedResponse, ReconcileRequest},
        time_block::{TimeBlock, TimeBlockProposal},
    },
    scheduling::{reconcile::reconcile, validator::validate_replacement},
};
use tracing::info;
use uuid::Uuid;

use crate::{handlers::load_plan_or_not_found, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn reconcile_blocks(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReconcileRequest>,
) -> Result<Json<ValidationReport>, AppError> {
    let plan = load_plan_or_not_found(&state, id).await?;

    let mut report = reconcile(&payload.proposals, &plan, Utc::now());

    if !report.accepted.is_empty() {
        let stored = studyplan_db::repositories::time_block::create_time_blocks(
            &state.db_pool,
            &report.accepted,
        )
        .await
        .map_err(PlanError::Database)?;

        report.accepted = stored.into_iter().map(TimeBlock::from).collect();
    }

    info!(
        "Plan {}: stored {} blocks, rejected {}",
        id,
        report.accepted.len(),
        report.rejected_count()
    );
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn replace_block(
    State(state): State<Arc<ApiState>>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
    Json(proposal): Json<TimeBlockProposal>,
) -> Result<Json<TimeBlock>, AppError> {
    let plan = load_plan_or_not_found(&state, id).await?;

    if plan.find_block(block_id).is_none() {
        return Err(AppError(PlanError::NotFound(format!(
            "Time block with ID {} not found in plan {}",
            block_id, id
        ))));
    }

    let replacement =
        validate_replacement(&proposal, &plan, block_id, Utc::now()).map_err(PlanError::Rejected)?;

    let row = studyplan_db::repositories::time_block::replace_time_block(
        &state.db_pool,
        block_id,
        &replacement,
    )
    .await
    .map_err(PlanError::Database)?
    .ok_or_else(|| {
        PlanError::NotFound(format!("Time block with ID {} not found", block_id))
    })?;

    Ok(Json(TimeBlock::from(row)))
}

#[axum::debug_handler]
pub async fn delete_block(
    State(state): State<Arc<ApiState>>,
    Path((id, block_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted =
        studyplan_db::repositories::time_block::delete_time_block(&state.db_pool, id, block_id)
            .await
            .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Time block with ID {} not found in plan {}",
            block_id, id
        ))));
    }

    Ok(Json(DeletedResponse {
        id: block_id,
        deleted_at: Utc::now(),
    }))
}
