use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PlanError, PlanResult};
use crate::scheduling::overlap;

use super::interval::Interval;
use super::time_block::TimeBlock;

/// Longest plan accepted, in days. The grid holds one column per day.
pub const MAX_PLAN_DAYS: i64 = 366;

/// A study plan and the sessions it owns.
///
/// `blocks` is kept sorted by start time and no two blocks overlap.
/// [`StudyPlan::add_accepted`] and [`StudyPlan::replace_block`] panic rather
/// than let that invariant break; deserializing returns an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlanRecord")]
pub struct StudyPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    blocks: Vec<TimeBlock>,
}

impl StudyPlan {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> PlanResult<Self> {
        Self::check_range(start_date, end_date)?;

        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            start_date,
            end_date,
            blocks: Vec::new(),
        })
    }

    /// Rejects empty, inverted and overlong date ranges.
    pub fn check_range(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> PlanResult<()> {
        if end_date <= start_date {
            return Err(PlanError::Validation(format!(
                "Plan end date {} must be after start date {}",
                end_date, start_date
            )));
        }
        if end_date - start_date > Duration::days(MAX_PLAN_DAYS) {
            return Err(PlanError::Validation(format!(
                "Plan may span at most {} days",
                MAX_PLAN_DAYS
            )));
        }
        Ok(())
    }

    /// Rebuilds a plan from storage. Stored blocks are trusted as-is and only
    /// put back into start order.
    pub fn from_parts(
        id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        mut blocks: Vec<TimeBlock>,
    ) -> PlanResult<Self> {
        let mut plan = Self::new(id, title, description, start_date, end_date)?;
        blocks.sort_by_key(TimeBlock::start);
        plan.blocks = blocks;
        Ok(plan)
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start_date, self.end_date)
    }

    /// Number of calendar columns the plan spans, rounding a partial day up.
    pub fn length_in_days(&self) -> usize {
        let day = Duration::days(1).num_milliseconds();
        let span = (self.end_date - self.start_date).num_milliseconds();
        ((span + day - 1) / day) as usize
    }

    pub fn find_block(&self, id: Uuid) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.id == Some(id))
    }

    /// Appends blocks that already passed reconciliation.
    ///
    /// # Panics
    ///
    /// Panics if a block belongs to another plan or overlaps any block
    /// already held (including ones added earlier in the same call).
    pub fn add_accepted(mut self, new_blocks: impl IntoIterator<Item = TimeBlock>) -> Self {
        for block in new_blocks {
            self.insert_sorted(block);
        }
        self
    }

    /// Swaps the block with `id` for `replacement`, keeping the id.
    ///
    /// Returns the previous block, or `None` (leaving the plan untouched) if
    /// no block has that id.
    ///
    /// # Panics
    ///
    /// Panics if the replacement overlaps any of the other blocks.
    pub fn replace_block(&mut self, id: Uuid, replacement: TimeBlock) -> Option<TimeBlock> {
        let index = self.blocks.iter().position(|block| block.id == Some(id))?;
        let previous = self.blocks.remove(index);
        self.insert_sorted(replacement.with_id(id));
        Some(previous)
    }

    pub fn remove_block(&mut self, id: Uuid) -> Option<TimeBlock> {
        let index = self.blocks.iter().position(|block| block.id == Some(id))?;
        Some(self.blocks.remove(index))
    }

    fn insert_sorted(&mut self, block: TimeBlock) {
        if let Err(err) = self.try_insert(block) {
            panic!("{}", err);
        }
    }

    fn try_insert(&mut self, block: TimeBlock) -> PlanResult<()> {
        if block.plan_id != self.id {
            return Err(PlanError::Validation(format!(
                "block for plan {} added to plan {}",
                block.plan_id, self.id
            )));
        }
        if overlap::intersects_any(
            &block.interval,
            self.blocks.iter().map(|existing| &existing.interval),
        ) {
            return Err(PlanError::Validation(format!(
                "block {:?} at {} overlaps an existing block in plan {}",
                block.label,
                block.start(),
                self.id
            )));
        }

        let index = self
            .blocks
            .partition_point(|existing| existing.start() < block.start());
        self.blocks.insert(index, block);
        Ok(())
    }
}

/// Wire shape of a plan, checked by [`StudyPlan::try_from`] before use.
#[derive(Deserialize)]
struct PlanRecord {
    id: Uuid,
    title: String,
    #[serde(default)]
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(default)]
    blocks: Vec<TimeBlock>,
}

impl TryFrom<PlanRecord> for StudyPlan {
    type Error = PlanError;

    fn try_from(record: PlanRecord) -> PlanResult<Self> {
        let mut plan = Self::new(
            record.id,
            record.title,
            record.description,
            record.start_date,
            record.end_date,
        )?;
        for block in record.blocks {
            plan.try_insert(block)?;
        }
        Ok(plan)
    }
}
