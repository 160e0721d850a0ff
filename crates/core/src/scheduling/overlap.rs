//! Half-open interval intersection.
//!
//! Intervals that only share an endpoint do not overlap: a session ending at
//! 10:00 and one starting at 10:00 can sit side by side. A plan holds at most
//! a few hundred hourly slots, so a linear scan is all `intersects_any` needs.

use crate::models::interval::Interval;

pub fn intersects(a: &Interval, b: &Interval) -> bool {
    a.start < b.end && b.start < a.end
}

pub fn intersects_any<'a>(
    candidate: &Interval,
    existing: impl IntoIterator<Item = &'a Interval>,
) -> bool {
    existing
        .into_iter()
        .any(|interval| intersects(candidate, interval))
}
