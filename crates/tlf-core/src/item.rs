//! Timeline entries and their validated identifiers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for item construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Item identifiers start at 1.
    #[error("item ID must be positive, got {value}")]
    ZeroId { value: u32 },
}

/// A validated item identifier.
///
/// Identifiers are positive integers. Uniqueness within a dataset is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemId(u32);

impl ItemId {
    /// Creates a new ID after validation.
    pub const fn new(id: u32) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::ZeroId { value: id });
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ItemId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A labelled span on the timeline.
///
/// `start <= end` is expected but not checked. A reversed span projects to a
/// negative width and classifies by plain comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedItem {
    /// Unique identifier within the dataset.
    pub id: ItemId,
    /// Display label.
    pub label: String,
    /// Inclusive start of the span.
    pub start: DateTime<Utc>,
    /// Inclusive end of the span.
    pub end: DateTime<Utc>,
}

impl TimedItem {
    /// Creates a new item, rejecting an empty label.
    pub fn new(
        id: ItemId,
        label: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ValidationError::Empty { field: "label" });
        }
        Ok(Self {
            id,
            label,
            start,
            end,
        })
    }
}
