//! Core logic for the timeline filter.
//!
//! This crate contains:
//! - Range classification: inclusive-overlap and fully-contained tests with
//!   independently open range bounds
//! - Axis projection: deriving a padded display window and mapping
//!   timestamps to percentages
//! - Layout: the per-control-state view model consumed by renderers

pub mod axis;
pub mod dataset;
mod item;
pub mod layout;
mod range;

pub use axis::{AxisError, DEFAULT_MARGIN_MS, DisplayWindow, derive_window};
pub use item::{ItemId, TimedItem, ValidationError};
pub use layout::{Controls, Timeline, TimelineView};
pub use range::{Algorithm, Range, UnknownAlgorithm, Verdict, classify};
