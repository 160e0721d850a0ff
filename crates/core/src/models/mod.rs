pub mod interval;
pub mod report;
pub mod requests;
pub mod study_plan;
pub mod time_block;
