//! Display window derivation and linear timestamp projection.
//!
//! A [`DisplayWindow`] can only be built with `end > start`, so
//! [`DisplayWindow::project`] never divides by zero and needs no error path.
//! Projection does not clamp: timestamps outside the window land outside
//! `[0, 100]` and clipping is left to the renderer.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::item::TimedItem;
use crate::range::Range;

/// Padding applied on each side of the dataset when none is configured (one day).
pub const DEFAULT_MARGIN_MS: i64 = 86_400_000;

/// Errors raised while building a display window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// The inputs cannot produce a window.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// The window has no positive width.
    #[error("degenerate display window: start {start} is not before end {end}")]
    DegenerateWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// The padded time interval mapped onto `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DisplayWindow {
    /// Creates a window, rejecting zero or negative width.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AxisError> {
        if end <= start {
            return Err(AxisError::DegenerateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Width of the window. Always positive.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Maps `timestamp` to a percentage of the window width.
    ///
    /// `start` maps to 0 and `end` to 100. Values outside the window are not
    /// clamped.
    pub fn project(&self, timestamp: DateTime<Utc>) -> f64 {
        let offset = nanoseconds(timestamp - self.start);
        let total = nanoseconds(self.span());
        offset / total * 100.0
    }
}

/// Duration in nanoseconds as `f64`.
///
/// Nanoseconds are the resolution of `Duration`, so any positive window has a
/// nonzero total. Spans past ~292 years overflow `i64` nanoseconds and fall
/// back to millisecond resolution.
#[expect(
    clippy::cast_precision_loss,
    reason = "sub-nanosecond rounding is irrelevant for percentages"
)]
fn nanoseconds(duration: Duration) -> f64 {
    duration.num_nanoseconds().map_or_else(
        || duration.num_milliseconds() as f64 * 1_000_000.0,
        |ns| ns as f64,
    )
}

/// Derives the display window for a dataset and its filter range.
///
/// The window covers every item span plus whichever range bounds are set,
/// padded by `margin` on both sides.
pub fn derive_window(
    items: &[TimedItem],
    range: &Range,
    margin: Duration,
) -> Result<DisplayWindow, AxisError> {
    if margin < Duration::zero() {
        return Err(AxisError::InvalidInput {
            reason: "margin cannot be negative",
        });
    }

    let (Some(min_start), Some(max_end)) = (
        items.iter().map(|item| item.start).min(),
        items.iter().map(|item| item.end).max(),
    ) else {
        return Err(AxisError::InvalidInput {
            reason: "cannot derive a window from an empty dataset",
        });
    };

    let min_start = range.start.map_or(min_start, |start| start.min(min_start));
    let max_end = range.end.map_or(max_end, |end| end.max(max_end));

    let (Some(start), Some(end)) = (
        min_start.checked_sub_signed(margin),
        max_end.checked_add_signed(margin),
    ) else {
        return Err(AxisError::InvalidInput {
            reason: "margin overflows the timestamp range",
        });
    };

    let window = DisplayWindow::new(start, end)?;
    tracing::debug!(
        items = items.len(),
        start = %window.start,
        end = %window.end,
        "derived display window"
    );
    Ok(window)
}
