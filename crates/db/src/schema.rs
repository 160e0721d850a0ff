use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

// Text columns are unbounded so a long label never fails a batch insert
const CREATE_STUDY_PLANS: &str = r#"
    CREATE TABLE IF NOT EXISTS study_plans (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        start_date TIMESTAMP WITH TIME ZONE NOT NULL,
        end_date TIMESTAMP WITH TIME ZONE NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_plan_range CHECK (end_date > start_date)
    )
"#;

// Blocks go away with their plan
const CREATE_TIME_BLOCKS: &str = r#"
    CREATE TABLE IF NOT EXISTS time_blocks (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        plan_id UUID NOT NULL REFERENCES study_plans(id) ON DELETE CASCADE,
        label TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        start_time TIMESTAMP WITH TIME ZONE NOT NULL,
        end_time TIMESTAMP WITH TIME ZONE NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_block_range CHECK (end_time > start_time)
    )
"#;

// One statement per query; prepared statements take a single command
const CREATE_INDEXES: [&str; 2] = [
    "CREATE INDEX IF NOT EXISTS idx_time_blocks_plan_id ON time_blocks(plan_id)",
    "CREATE INDEX IF NOT EXISTS idx_time_blocks_start_time ON time_blocks(start_time)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(CREATE_STUDY_PLANS).execute(pool).await?;
    sqlx::query(CREATE_TIME_BLOCKS).execute(pool).await?;

    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
