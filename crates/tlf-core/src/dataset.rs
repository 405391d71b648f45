//! Built-in demo dataset.
//!
//! Six items laid out around a 09:00-17:00 filter range on 2026-01-15, one
//! per relation an item can have with the range.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::item::{ItemId, TimedItem, ValidationError};
use crate::range::Range;

const DEMO_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 15) {
    Some(day) => day,
    None => panic!("demo day is a valid calendar date"),
};

/// Midnight UTC of the demo day.
pub fn demo_base() -> DateTime<Utc> {
    DEMO_DAY.and_time(NaiveTime::MIN).and_utc()
}

/// The demo filter range, 09:00 to 17:00 on the demo day.
pub fn demo_range() -> Range {
    let base = demo_base();
    Range::bounded(base + Duration::hours(9), base + Duration::hours(17))
}

/// The six demo items, placed relative to the filter bounds.
fn items_between(
    filter_start: DateTime<Utc>,
    filter_end: DateTime<Utc>,
) -> Result<Vec<TimedItem>, ValidationError> {
    let hours = Duration::hours;

    let cases = [
        // Straddles both bounds.
        (filter_start - hours(2), filter_end + hours(2)),
        // Entirely after the range.
        (filter_end + hours(1), filter_end + hours(5)),
        // Overlaps the start only.
        (filter_start - hours(2), filter_start + hours(2)),
        // Overlaps the end only.
        (filter_end - hours(2), filter_end + hours(2)),
        // Entirely before the range.
        (filter_start - hours(5), filter_start - hours(1)),
        // Entirely inside the range.
        (filter_start + hours(2), filter_start + hours(5)),
    ];

    cases
        .into_iter()
        .zip(1_u32..)
        .map(|((start, end), n)| TimedItem::new(ItemId::new(n)?, format!("Case {n}"), start, end))
        .collect()
}

/// The six demo items around the 09:00-17:00 demo range.
pub fn demo_items() -> Result<Vec<TimedItem>, ValidationError> {
    let base = demo_base();
    items_between(base + Duration::hours(9), base + Duration::hours(17))
}
