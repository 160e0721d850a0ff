use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PlanError, PlanResult};

use super::interval::Interval;

/// An unvalidated candidate session, from a form or a block generator.
///
/// Nothing about it is trusted: `end` may precede `start`, the times may be
/// off the hour, and the range may fall outside the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlockProposal {
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeBlockProposal {
    pub fn new(
        label: impl Into<String>,
        description: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            start,
            end,
        }
    }

    /// Parses a JSON array of proposals as produced by a block generator.
    pub fn parse_batch(json: &str) -> PlanResult<Vec<Self>> {
        serde_json::from_str(json)
            .map_err(|e| PlanError::Validation(format!("Malformed proposal payload: {}", e)))
    }
}

/// A study session that passed validation.
///
/// `id` stays `None` until the persistence layer assigns one. Blocks are
/// never edited in place; replacing one goes through the validator again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: Option<Uuid>,
    pub plan_id: Uuid,
    pub label: String,
    pub description: String,
    #[serde(flatten)]
    pub interval: Interval,
}

impl TimeBlock {
    pub(crate) fn from_proposal(proposal: &TimeBlockProposal, plan_id: Uuid) -> Self {
        Self {
            id: None,
            plan_id,
            label: proposal.label.clone(),
            description: proposal.description.clone(),
            interval: Interval::new(proposal.start, proposal.end),
        }
    }

    /// Promotes a pending block to a persisted one.
    pub fn with_id(self, id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.interval.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.interval.end
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
