use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};

/// A half-open time range `[start, end)`.
///
/// The type itself does not care about duration; the one-hour rule for study
/// sessions is enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Builds an interval, panicking if `end <= start`.
    ///
    /// Use [`Interval::try_new`] for values coming from outside the process.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(
            end > start,
            "malformed interval: end {} is not after start {}",
            end,
            start
        );
        Self { start, end }
    }

    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> PlanResult<Self> {
        if end <= start {
            return Err(PlanError::Validation(format!(
                "Interval end {} must be after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// True if `instant` falls inside `[start, end)`.
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// True if `other` lies entirely within this interval, endpoints included.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Whether an instant sits exactly on the top of an hour.
pub fn is_hour_aligned(instant: DateTime<Utc>) -> bool {
    instant.minute() == 0 && instant.second() == 0 && instant.nanosecond() == 0
}
