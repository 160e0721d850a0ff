pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use studyplan_core::models::study_plan::StudyPlan;
use uuid::Uuid;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Loads a plan together with its stored blocks.
pub async fn load_plan(pool: &DbPool, id: Uuid) -> Result<Option<StudyPlan>> {
    let Some(plan) = repositories::study_plan::get_study_plan_by_id(pool, id).await? else {
        return Ok(None);
    };
    let blocks = repositories::time_block::get_time_blocks_by_plan_id(pool, id).await?;

    Ok(Some(plan.into_plan(blocks)?))
}
