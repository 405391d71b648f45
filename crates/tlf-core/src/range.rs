//! Filter ranges and the two interval-relation algorithms.
//!
//! Both algorithms share one edge-case policy: a range with neither bound
//! set matches nothing. An unbounded range is read as "no filter to test
//! against", so classification answers `false` rather than `true`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::TimedItem;

/// Interval-relation algorithm used to decide whether an item matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Item and range share at least one instant (closed bounds).
    #[default]
    #[serde(rename = "inclusive")]
    InclusiveOverlap,
    /// Item lies entirely within the range.
    #[serde(rename = "contained")]
    FullyContained,
}

impl Algorithm {
    /// Stable name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InclusiveOverlap => "inclusive",
            Self::FullyContained => "contained",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InclusiveOverlap => "inclusive overlap",
            Self::FullyContained => "fully contained",
        }
    }

    /// Tests a span against optional range bounds.
    ///
    /// Works on any ordered timestamp representation. Malformed spans
    /// (`item_start > item_end`) are compared as given.
    pub fn matches<T: PartialOrd>(
        self,
        item_start: &T,
        item_end: &T,
        range_start: Option<&T>,
        range_end: Option<&T>,
    ) -> bool {
        match self {
            Self::InclusiveOverlap => match (range_start, range_end) {
                (Some(rs), Some(re)) => item_start <= re && item_end >= rs,
                (Some(rs), None) => item_end >= rs,
                (None, Some(re)) => item_start <= re,
                (None, None) => false,
            },
            Self::FullyContained => match (range_start, range_end) {
                (Some(rs), Some(re)) => item_start >= rs && item_end <= re,
                (Some(rs), None) => item_start >= rs,
                (None, Some(re)) => item_end <= re,
                (None, None) => false,
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: {0} (expected 'inclusive' or 'contained')")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inclusive" | "inclusive-overlap" | "overlap" => Ok(Self::InclusiveOverlap),
            "contained" | "fully-contained" => Ok(Self::FullyContained),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A filter range whose sides are independently optional.
///
/// `None` on a side means "no constraint", which is distinct from any
/// timestamp value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl Range {
    /// A range with both sides bounded.
    pub const fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A range with neither side bounded.
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns the effective range after opening the requested sides.
    #[must_use]
    pub const fn open(self, open_start: bool, open_end: bool) -> Self {
        Self {
            start: if open_start { None } else { self.start },
            end: if open_end { None } else { self.end },
        }
    }

    /// True when neither side constrains anything.
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Classifies one item against a range with the given algorithm.
pub fn classify(algorithm: Algorithm, item: &TimedItem, range: &Range) -> bool {
    algorithm.matches(
        &item.start,
        &item.end,
        range.start.as_ref(),
        range.end.as_ref(),
    )
}

/// Results of both algorithms for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub inclusive: bool,
    pub contained: bool,
}

impl Verdict {
    /// Evaluates both algorithms for `item` against `range`.
    pub fn evaluate(item: &TimedItem, range: &Range) -> Self {
        Self {
            inclusive: classify(Algorithm::InclusiveOverlap, item, range),
            contained: classify(Algorithm::FullyContained, item, range),
        }
    }

    /// The result for the selected algorithm.
    pub const fn selected(self, algorithm: Algorithm) -> bool {
        match algorithm {
            Algorithm::InclusiveOverlap => self.inclusive,
            Algorithm::FullyContained => self.contained,
        }
    }
}
