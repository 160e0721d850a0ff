use chrono::{DateTime, Duration, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use studyplan_api::middleware::error_handling::AppError;
use studyplan_core::{
    errors::PlanError,
    models::{requests::CreatePlanRequest, study_plan::StudyPlan},
};
use studyplan_db::models::DbStudyPlan;
use uuid::Uuid;

use crate::test_utils::{june, TestContext};

// Mirrors handlers::plan::create_plan with the repository mocked out
async fn create_wrapper(ctx: &TestContext, payload: CreatePlanRequest) -> Result<StudyPlan, AppError> {
    StudyPlan::check_range(payload.start_date, payload.end_date)?;

    if payload.title.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Plan title must not be empty".to_string(),
        )));
    }

    let row = ctx
        .plan_repo
        .create_study_plan(
            payload.title,
            payload.description,
            payload.start_date,
            payload.end_date,
        )
        .await?;
    Ok(row.into_plan(Vec::new())?)
}

// Mirrors handlers::plan::delete_plan
async fn delete_wrapper(ctx: &TestContext, id: Uuid) -> Result<(), AppError> {
    let deleted = ctx.plan_repo.delete_study_plan(id).await?;
    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Study plan with ID {} not found",
            id
        ))));
    }
    Ok(())
}

fn request(title: &str, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> CreatePlanRequest {
    CreatePlanRequest {
        title: title.to_string(),
        description: String::new(),
        start_date,
        end_date,
    }
}

#[tokio::test]
async fn test_create_plan_stores_valid_range() {
    let mut ctx = TestContext::new();
    ctx.plan_repo
        .expect_create_study_plan()
        .withf(|title, _, start, end| title == "Finals" && *start == june(2, 0) && *end == june(9, 0))
        .times(1)
        .returning(|title, description, start_date, end_date| {
            Ok(DbStudyPlan {
                id: Uuid::new_v4(),
                title,
                description,
                start_date,
                end_date,
                created_at: june(1, 0),
            })
        });

    let plan = create_wrapper(&ctx, request("Finals", june(2, 0), june(9, 0)))
        .await
        .unwrap();

    assert_eq!(plan.title, "Finals");
    assert_eq!(plan.length_in_days(), 7);
    assert!(plan.blocks().is_empty());
}

#[tokio::test]
async fn test_create_plan_rejects_overlong_range_before_storage() {
    let mut ctx = TestContext::new();
    ctx.plan_repo.expect_create_study_plan().never();

    let start = june(2, 0);
    let result = create_wrapper(&ctx, request("Decade", start, start + Duration::days(3650))).await;

    assert!(matches!(result, Err(AppError(PlanError::Validation(_)))));
}

#[tokio::test]
async fn test_create_plan_surfaces_database_failure() {
    let mut ctx = TestContext::new();
    ctx.plan_repo
        .expect_create_study_plan()
        .returning(|_, _, _, _| Err(eyre::eyre!("connection refused")));

    let result = create_wrapper(&ctx, request("Finals", june(2, 0), june(3, 0))).await;

    assert!(matches!(result, Err(AppError(PlanError::Database(_)))));
}

#[tokio::test]
async fn test_delete_plan() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();
    ctx.plan_repo
        .expect_delete_study_plan()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(true));

    assert!(delete_wrapper(&ctx, id).await.is_ok());
}

#[tokio::test]
async fn test_delete_unknown_plan() {
    let mut ctx = TestContext::new();
    ctx.plan_repo
        .expect_delete_study_plan()
        .returning(|_| Ok(false));

    let result = delete_wrapper(&ctx, Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError(PlanError::NotFound(_)))));
}
