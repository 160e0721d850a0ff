use crate::models::DbTimeBlock;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use studyplan_core::models::time_block::TimeBlock;
use uuid::Uuid;

/// Stores a batch of accepted blocks in one transaction and returns the
/// stored rows, in the order given.
pub async fn create_time_blocks(
    pool: &Pool<Postgres>,
    blocks: &[TimeBlock],
) -> Result<Vec<DbTimeBlock>> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut created = Vec::with_capacity(blocks.len());

    for block in blocks {
        let id = block.id.unwrap_or_else(Uuid::new_v4);

        let row = sqlx::query_as::<_, DbTimeBlock>(
            r#"
            INSERT INTO time_blocks (id, plan_id, label, description, start_time, end_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, plan_id, label, description, start_time, end_time, created_at
            "#,
        )
        .bind(id)
        .bind(block.plan_id)
        .bind(&block.label)
        .bind(&block.description)
        .bind(block.start())
        .bind(block.end())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        created.push(row);
    }

    tx.commit().await?;
    tracing::debug!("Stored {} time blocks", created.len());
    Ok(created)
}

pub async fn get_time_blocks_by_plan_id(
    pool: &Pool<Postgres>,
    plan_id: Uuid,
) -> Result<Vec<DbTimeBlock>> {
    let time_blocks = sqlx::query_as::<_, DbTimeBlock>(
        r#"
        SELECT id, plan_id, label, description, start_time, end_time, created_at
        FROM time_blocks
        WHERE plan_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;

    Ok(time_blocks)
}

/// Overwrites the block with the replacement's contents, keeping its id.
pub async fn replace_time_block(
    pool: &Pool<Postgres>,
    id: Uuid,
    replacement: &TimeBlock,
) -> Result<Option<DbTimeBlock>> {
    let row = sqlx::query_as::<_, DbTimeBlock>(
        r#"
        UPDATE time_blocks
        SET label = $3, description = $4, start_time = $5, end_time = $6
        WHERE id = $1 AND plan_id = $2
        RETURNING id, plan_id, label, description, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(replacement.plan_id)
    .bind(&replacement.label)
    .bind(&replacement.description)
    .bind(replacement.start())
    .bind(replacement.end())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_time_block(pool: &Pool<Postgres>, plan_id: Uuid, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM time_blocks
        WHERE id = $1 AND plan_id = $2
        "#,
    )
    .bind(id)
    .bind(plan_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
