pub mod study_plan;
pub mod time_block;
