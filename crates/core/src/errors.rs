use thiserror::Error;

use crate::models::report::RejectReason;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Proposal rejected: {0}")]
    Rejected(#[from] RejectReason),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type PlanResult<T> = Result<T, PlanError>;
