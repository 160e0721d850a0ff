use chrono::{DateTime, Utc};
use mockall::mock;
use studyplan_core::models::{study_plan::StudyPlan, time_block::TimeBlock};
use uuid::Uuid;

use crate::models::{DbStudyPlan, DbTimeBlock};

// Mock repositories for testing
mock! {
    pub StudyPlanRepo {
        pub async fn create_study_plan(
            &self,
            title: String,
            description: String,
            start_date: DateTime<Utc>,
            end_date: DateTime<Utc>,
        ) -> eyre::Result<DbStudyPlan>;

        pub async fn load_plan(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<StudyPlan>>;

        pub async fn delete_study_plan(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub TimeBlockRepo {
        pub async fn create_time_blocks(
            &self,
            blocks: Vec<TimeBlock>,
        ) -> eyre::Result<Vec<DbTimeBlock>>;

        pub async fn get_time_blocks_by_plan_id(
            &self,
            plan_id: Uuid,
        ) -> eyre::Result<Vec<DbTimeBlock>>;

        pub async fn replace_time_block(
            &self,
            id: Uuid,
            replacement: TimeBlock,
        ) -> eyre::Result<Option<DbTimeBlock>>;

        pub async fn delete_time_block(
            &self,
            plan_id: Uuid,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
