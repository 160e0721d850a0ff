use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studyplan_core::{
    errors::PlanResult,
    models::{interval::Interval, study_plan::StudyPlan, time_block::TimeBlock},
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudyPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeBlock {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub label: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<DbTimeBlock> for TimeBlock {
    fn from(row: DbTimeBlock) -> Self {
        TimeBlock {
            id: Some(row.id),
            plan_id: row.plan_id,
            label: row.label,
            description: row.description,
            // The table's CHECK constraint guarantees end_time > start_time.
            interval: Interval::new(row.start_time, row.end_time),
        }
    }
}

impl DbStudyPlan {
    pub fn into_plan(self, blocks: Vec<DbTimeBlock>) -> PlanResult<StudyPlan> {
        StudyPlan::from_parts(
            self.id,
            self.title,
            self.description,
            self.start_date,
            self.end_date,
            blocks.into_iter().map(TimeBlock::from).collect(),
        )
    }
}
