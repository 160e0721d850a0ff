//! Per-proposal checks.
//!
//! Checks run in a fixed order and the first failure wins, so a given proposal
//! against a given plan always yields the same reason:
//!
//! 1. exactly one hour, starting and ending on the hour ([`RejectReason::NotOneHour`])
//! 2. inside the plan's date range ([`RejectReason::OutOfRange`])
//! 3. not starting before `now` ([`RejectReason::InThePast`])
//! 4. clear of every existing and already-accepted block ([`RejectReason::Overlaps`])

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{
    interval::{Interval, is_hour_aligned},
    report::RejectReason,
    study_plan::StudyPlan,
    time_block::{TimeBlock, TimeBlockProposal},
};

use super::overlap;

/// Validates one proposal against `plan` and the blocks accepted so far in
/// the current batch.
///
/// The returned block has no id. The caller must push it onto
/// `accepted_in_batch` before validating the next proposal.
pub fn validate(
    proposal: &TimeBlockProposal,
    plan: &StudyPlan,
    accepted_in_batch: &[TimeBlock],
    now: DateTime<Utc>,
) -> Result<TimeBlock, RejectReason> {
    let existing = plan
        .blocks()
        .iter()
        .chain(accepted_in_batch)
        .map(|block| &block.interval);

    check(proposal, plan, existing, now)?;
    Ok(TimeBlock::from_proposal(proposal, plan.id))
}

/// Validates a proposal meant to take the place of block `block_id`.
///
/// The block being replaced is ignored by the overlap check, so a session can
/// be relabelled or nudged into a slot it partly occupied. An unknown
/// `block_id` simply means nothing is excluded.
pub fn validate_replacement(
    proposal: &TimeBlockProposal,
    plan: &StudyPlan,
    block_id: Uuid,
    now: DateTime<Utc>,
) -> Result<TimeBlock, RejectReason> {
    let existing = plan
        .blocks()
        .iter()
        .filter(|block| block.id != Some(block_id))
        .map(|block| &block.interval);

    check(proposal, plan, existing, now)?;
    Ok(TimeBlock::from_proposal(proposal, plan.id).with_id(block_id))
}

fn check<'a>(
    proposal: &TimeBlockProposal,
    plan: &StudyPlan,
    existing: impl Iterator<Item = &'a Interval>,
    now: DateTime<Utc>,
) -> Result<(), RejectReason> {
    if proposal.end - proposal.start != Duration::hours(1)
        || !is_hour_aligned(proposal.start)
        || !is_hour_aligned(proposal.end)
    {
        return Err(RejectReason::NotOneHour);
    }

    // Exactly one hour long from here on, so the interval is well formed
    let candidate = Interval::new(proposal.start, proposal.end);
    if !plan.interval().encloses(&candidate) {
        return Err(RejectReason::OutOfRange);
    }

    if proposal.start < now {
        return Err(RejectReason::InThePast);
    }

    if overlap::intersects_any(&candidate, existing) {
        return Err(RejectReason::Overlaps);
    }

    Ok(())
}
