//! Batch acceptance of untrusted proposals.
//!
//! Reconciliation is best-effort: a batch with bad entries still yields its
//! valid subset. Proposals are checked strictly in input order, and each one
//! is checked against everything accepted before it, so when two proposals
//! collide the earlier one wins. For the same reason a single batch must not
//! be split across threads. Separate plans share nothing and may be
//! reconciled concurrently.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::models::{
    report::{Rejection, ValidationReport},
    study_plan::StudyPlan,
    time_block::TimeBlockProposal,
};

use super::validator;

pub fn reconcile(
    proposals: &[TimeBlockProposal],
    plan: &StudyPlan,
    now: DateTime<Utc>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for proposal in proposals {
        match validator::validate(proposal, plan, &report.accepted, now) {
            Ok(block) => report.accepted.push(block),
            Err(reason) => {
                debug!(
                    "Rejected proposal {:?} ({} - {}) for plan {}: {:?}",
                    proposal.label, proposal.start, proposal.end, plan.id, reason
                );
                report.rejected.push(Rejection {
                    proposal: proposal.clone(),
                    reason,
                });
            }
        }
    }

    info!(
        "Reconciled {} proposals for plan {}: {} accepted, {} rejected",
        proposals.len(),
        plan.id,
        report.accepted.len(),
        report.rejected.len()
    );

    report
}
