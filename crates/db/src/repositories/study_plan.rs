use crate::models::DbStudyPlan;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_study_plan(
    pool: &Pool<Postgres>,
    title: &str,
    description: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<DbStudyPlan> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating study plan: id={}, title={}, range={} - {}",
        id, title, start_date, end_date
    );

    let plan = sqlx::query_as::<_, DbStudyPlan>(
        r#"
        INSERT INTO study_plans (id, title, description, start_date, end_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, description, start_date, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(start_date)
    .bind(end_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Study plan created successfully: id={}", id);
    Ok(plan)
}

pub async fn get_study_plan_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStudyPlan>> {
    tracing::debug!("Getting study plan by id: {}", id);

    let plan = sqlx::query_as::<_, DbStudyPlan>(
        r#"
        SELECT id, title, description, start_date, end_date, created_at
        FROM study_plans
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if plan.is_none() {
        tracing::debug!("Study plan not found: id={}", id);
    }

    Ok(plan)
}

/// Deletes a plan; its time blocks are removed by the foreign key cascade.
/// Returns whether a plan was deleted.
pub async fn delete_study_plan(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM study_plans
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
