//! # Calendar Projections
//!
//! Read-only views of a plan's blocks for display.
//!
//! ## Grid
//!
//! [`to_grid`] lays a plan out as one column per day and one row per hour.
//! Columns are counted from `start_date` in whole 24-hour steps, so column 0
//! covers `[start_date, start_date + 1 day)`. Rows are the UTC hour of the
//! block's start. Because blocks are one hour long, on the hour and never
//! overlap, each cell holds at most one block.
//!
//! ## Time of day
//!
//! [`group_by_time_of_day`] splits blocks into morning `[07, 12)`, afternoon
//! `[12, 18)` and evening (everything else, including the small hours).

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{study_plan::StudyPlan, time_block::TimeBlock};

pub const HOURS_PER_DAY: usize = 24;

const MORNING_START: u32 = 7;
const AFTERNOON_START: u32 = 12;
const EVENING_START: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn of_hour(hour: u32) -> Self {
        match hour {
            h if (MORNING_START..AFTERNOON_START).contains(&h) => TimeOfDay::Morning,
            h if (AFTERNOON_START..EVENING_START).contains(&h) => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn of_block(block: &TimeBlock) -> Self {
        Self::of_hour(block.start().hour())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedBlocks {
    pub morning: Vec<TimeBlock>,
    pub afternoon: Vec<TimeBlock>,
    pub evening: Vec<TimeBlock>,
}

impl GroupedBlocks {
    pub fn bucket(&self, time_of_day: TimeOfDay) -> &[TimeBlock] {
        match time_of_day {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
        }
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDay {
    pub day_offset: usize,
    /// Start of the column, `start_date + day_offset days`.
    pub starts_at: DateTime<Utc>,
    pub hours: [Option<TimeBlock>; HOURS_PER_DAY],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub days: Vec<GridDay>,
}

impl Grid {
    pub fn len_days(&self) -> usize {
        self.days.len()
    }

    pub fn day(&self, day_offset: usize) -> Option<&GridDay> {
        self.days.get(day_offset)
    }

    pub fn cell(&self, day_offset: usize, hour: usize) -> Option<&TimeBlock> {
        self.days.get(day_offset)?.hours.get(hour)?.as_ref()
    }

    /// Every filled cell as `(day_offset, hour, block)`, column by column.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &TimeBlock)> + '_ {
        self.days.iter().flat_map(|day| {
            day.hours
                .iter()
                .enumerate()
                .filter_map(move |(hour, cell)| cell.as_ref().map(|block| (day.day_offset, hour, block)))
        })
    }
}

pub fn to_grid(plan: &StudyPlan) -> Grid {
    let mut days: Vec<GridDay> = (0..plan.length_in_days())
        .map(|day_offset| GridDay {
            day_offset,
            starts_at: plan.start_date + Duration::days(day_offset as i64),
            hours: std::array::from_fn(|_| None),
        })
        .collect();

    for block in plan.blocks() {
        let offset = block.start() - plan.start_date;
        let slot = usize::try_from(offset.num_days())
            .ok()
            .filter(|_| offset >= Duration::zero())
            .and_then(|day_offset| days.get_mut(day_offset));

        match slot {
            Some(day) => day.hours[block.start().hour() as usize] = Some(block.clone()),
            None => warn!(
                "Block {:?} at {} lies outside the grid of plan {}",
                block.label,
                block.start(),
                plan.id
            ),
        }
    }

    Grid { days }
}

/// Partitions blocks by time of day, keeping input order within each bucket.
pub fn group_by_time_of_day(blocks: &[TimeBlock]) -> GroupedBlocks {
    let mut grouped = GroupedBlocks::default();
    for block in blocks {
        let bucket = match TimeOfDay::of_block(block) {
            TimeOfDay::Morning => &mut grouped.morning,
            TimeOfDay::Afternoon => &mut grouped.afternoon,
            TimeOfDay::Evening => &mut grouped.evening,
        };
        bucket.push(block.clone());
    }
    grouped
}

/// Time-of-day view of the plan's blocks starting on `date` (UTC).
pub fn day_view(plan: &StudyPlan, date: NaiveDate) -> GroupedBlocks {
    let blocks: Vec<TimeBlock> = plan
        .blocks()
        .iter()
        .filter(|block| block.start().date_naive() == date)
        .cloned()
        .collect();
    group_by_time_of_day(&blocks)
}
