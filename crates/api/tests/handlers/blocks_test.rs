use chrono::{DateTime, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use studyplan_api::middleware::error_handling::AppError;
use studyplan_core::{
    errors::PlanError,
    models::{
        report::{RejectReason, ValidationReport},
        time_block::{TimeBlock, TimeBlockProposal},
    },
    scheduling::{reconcile::reconcile, validator::validate_replacement},
};
use uuid::Uuid;

use crate::test_utils::{june, one_day_plan, stored_row, TestContext};

// Mirrors handlers::blocks::reconcile_blocks with the repositories mocked out
async fn reconcile_wrapper(
    ctx: &TestContext,
    plan_id: Uuid,
    proposals: Vec<TimeBlockProposal>,
    now: DateTime<Utc>,
) -> Result<ValidationReport, AppError> {
    let plan = ctx
        .plan_repo
        .load_plan(plan_id)
        .await?
        .ok_or_else(|| AppError(PlanError::NotFound(format!("Study plan with ID {} not found", plan_id))))?;

    let mut report = reconcile(&proposals, &plan, now);
    if !report.accepted.is_empty() {
        let stored = ctx.block_repo.create_time_blocks(report.accepted.clone()).await?;
        report.accepted = stored.into_iter().map(TimeBlock::from).collect();
    }
    Ok(report)
}

// Mirrors handlers::blocks::replace_block
async fn replace_wrapper(
    ctx: &TestContext,
    plan_id: Uuid,
    block_id: Uuid,
    proposal: TimeBlockProposal,
    now: DateTime<Utc>,
) -> Result<TimeBlock, AppError> {
    let plan = ctx
        .plan_repo
        .load_plan(plan_id)
        .await?
        .ok_or_else(|| AppError(PlanError::NotFound("plan".to_string())))?;

    if plan.find_block(block_id).is_none() {
        return Err(AppError(PlanError::NotFound("block".to_string())));
    }

    let replacement =
        validate_replacement(&proposal, &plan, block_id, now).map_err(PlanError::Rejected)?;
    let row = ctx
        .block_repo
        .replace_time_block(block_id, replacement)
        .await?
        .ok_or_else(|| AppError(PlanError::NotFound("block".to_string())))?;
    Ok(TimeBlock::from(row))
}

#[test_log::test(tokio::test)]
async fn test_reconcile_stores_only_accepted_blocks() {
    let mut ctx = TestContext::new();
    let plan = one_day_plan();
    let plan_id = plan.id;

    ctx.plan_repo
        .expect_load_plan()
        .with(predicate::eq(plan_id))
        .times(1)
        .returning(move |_| Ok(Some(plan.clone())));
    ctx.block_repo
        .expect_create_time_blocks()
        .withf(|blocks: &Vec<TimeBlock>| {
            blocks.len() == 2 && blocks.iter().all(|block| block.id.is_none())
        })
        .times(1)
        .returning(|blocks| Ok(blocks.iter().map(stored_row).collect()));

    let proposals = vec![
        TimeBlockProposal::new("Math", "", june(2, 10), june(2, 11)),
        TimeBlockProposal::new("History", "", june(2, 10), june(2, 11)),
        TimeBlockProposal::new("Review", "", june(2, 23), june(3, 0)),
    ];

    let report = reconcile_wrapper(&ctx, plan_id, proposals, june(1, 0)).await.unwrap();

    assert_eq!(report.accepted.len(), 2);
    assert!(report.accepted.iter().all(TimeBlock::is_persisted));
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].proposal.label, "History");
    assert_eq!(report.rejected[0].reason, RejectReason::Overlaps);
}

#[tokio::test]
async fn test_reconcile_with_nothing_accepted_skips_storage() {
    let mut ctx = TestContext::new();
    let plan = one_day_plan();
    let plan_id = plan.id;

    ctx.plan_repo
        .expect_load_plan()
        .returning(move |_| Ok(Some(plan.clone())));
    ctx.block_repo.expect_create_time_blocks().never();

    let proposals = vec![TimeBlockProposal::new("Yesterday", "", june(2, 8), june(2, 9))];

    let report = reconcile_wrapper(&ctx, plan_id, proposals, june(2, 12)).await.unwrap();

    assert!(report.accepted.is_empty());
    assert_eq!(report.rejected[0].reason, RejectReason::InThePast);
}

#[tokio::test]
async fn test_reconcile_unknown_plan() {
    let mut ctx = TestContext::new();
    ctx.plan_repo.expect_load_plan().returning(|_| Ok(None));

    let result = reconcile_wrapper(&ctx, Uuid::new_v4(), Vec::new(), june(1, 0)).await;

    assert!(matches!(result, Err(AppError(PlanError::NotFound(_)))));
}

#[tokio::test]
async fn test_reconcile_database_failure() {
    let mut ctx = TestContext::new();
    ctx.plan_repo
        .expect_load_plan()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let result = reconcile_wrapper(&ctx, Uuid::new_v4(), Vec::new(), june(1, 0)).await;

    assert!(matches!(result, Err(AppError(PlanError::Database(_)))));
}

#[tokio::test]
async fn test_replace_block_rejects_collision() {
    let mut ctx = TestContext::new();
    let base = one_day_plan();
    let report = reconcile(
        &[
            TimeBlockProposal::new("Math", "", june(2, 10), june(2, 11)),
            TimeBlockProposal::new("History", "", june(2, 11), june(2, 12)),
        ],
        &base,
        june(1, 0),
    );
    let plan = base.add_accepted(report.accepted.into_iter().map(|b| b.with_id(Uuid::new_v4())));
    let plan_id = plan.id;
    let math_id = plan.blocks()[0].id.unwrap();

    ctx.plan_repo
        .expect_load_plan()
        .returning(move |_| Ok(Some(plan.clone())));
    ctx.block_repo.expect_replace_time_block().never();

    let result = replace_wrapper(
        &ctx,
        plan_id,
        math_id,
        TimeBlockProposal::new("Math", "", june(2, 11), june(2, 12)),
        june(1, 0),
    )
    .await;

    assert!(matches!(
        result,
        Err(AppError(PlanError::Rejected(RejectReason::Overlaps)))
    ));
}

#[tokio::test]
async fn test_replace_block_moves_session() {
    let mut ctx = TestContext::new();
    let base = one_day_plan();
    let report = reconcile(
        &[TimeBlockProposal::new("Math", "", june(2, 10), june(2, 11))],
        &base,
        june(1, 0),
    );
    let plan = base.add_accepted(report.accepted.into_iter().map(|b| b.with_id(Uuid::new_v4())));
    let plan_id = plan.id;
    let math_id = plan.blocks()[0].id.unwrap();

    ctx.plan_repo
        .expect_load_plan()
        .returning(move |_| Ok(Some(plan.clone())));
    ctx.block_repo
        .expect_replace_time_block()
        .with(predicate::eq(math_id), predicate::always())
        .times(1)
        .returning(|id, replacement| {
            let mut row = stored_row(&replacement);
            row.id = id;
            Ok(Some(row))
        });

    let moved = replace_wrapper(
        &ctx,
        plan_id,
        math_id,
        TimeBlockProposal::new("Math", "moved", june(2, 10) + chrono::Duration::minutes(30), june(2, 11)),
        june(1, 0),
    )
    .await;
    assert!(matches!(
        moved,
        Err(AppError(PlanError::Rejected(RejectReason::NotOneHour)))
    ));

    let moved = replace_wrapper(
        &ctx,
        plan_id,
        math_id,
        TimeBlockProposal::new("Math", "moved", june(2, 10) + chrono::Duration::hours(5), june(2, 16)),
        june(1, 0),
    )
    .await
    .unwrap();

    assert_eq!(moved.id, Some(math_id));
    assert_eq!(moved.start(), june(2, 15));
    assert_eq!(moved.description, "moved");
}
