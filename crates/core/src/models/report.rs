use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::time_block::{TimeBlock, TimeBlockProposal};

/// Why a proposal was turned away. These are expected outcomes, returned as data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("block must last exactly one hour and start on the hour")]
    NotOneHour,

    #[error("block falls outside the plan's date range")]
    OutOfRange,

    #[error("block starts in the past")]
    InThePast,

    #[error("block overlaps an existing session")]
    Overlaps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub proposal: TimeBlockProposal,
    pub reason: RejectReason,
}

/// Outcome of reconciling one batch of proposals. Both lists keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub accepted: Vec<TimeBlock>,
    pub rejected: Vec<Rejection>,
}

impl ValidationReport {
    pub fn is_fully_accepted(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}
