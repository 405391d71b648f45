//! View model for rendering a filtered timeline.
//!
//! [`Timeline`] owns a dataset and derives its display window once. Each
//! call to [`Timeline::view`] classifies the items under a control state and
//! computes bar geometry in window percentages. Renderers only read the
//! resulting [`TimelineView`].

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::axis::{AxisError, DisplayWindow, derive_window};
use crate::item::{ItemId, TimedItem};
use crate::range::{Algorithm, Range, Verdict};

/// User-controlled filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// Algorithm deciding whether an item is inside.
    pub algorithm: Algorithm,
    /// Drop the range's start bound.
    pub open_start: bool,
    /// Drop the range's end bound.
    pub open_end: bool,
}

/// Horizontal placement of a bar, in percent of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub left: f64,
    pub width: f64,
}

impl Bar {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Which side of the filter range a boundary line marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

/// Vertical marker drawn at a closed range bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryLine {
    pub side: Side,
    pub at: DateTime<Utc>,
    pub position: f64,
}

/// The filter range row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterRow {
    /// Range after applying the open toggles.
    pub effective: Range,
    /// An open side stretches the bar to the window edge.
    pub bar: Bar,
}

/// One classified item row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub bar: Bar,
    pub verdict: Verdict,
    /// Verdict of the selected algorithm.
    pub inside: bool,
}

/// Everything a renderer needs for one control state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub window: DisplayWindow,
    pub controls: Controls,
    pub filter: FilterRow,
    pub boundaries: Vec<BoundaryLine>,
    pub rows: Vec<ItemRow>,
}

/// A dataset with its filter range and cached display window.
#[derive(Debug, Clone)]
pub struct Timeline {
    items: Vec<TimedItem>,
    range: Range,
    window: DisplayWindow,
}

impl Timeline {
    /// Builds a timeline, deriving the window from the configured range.
    ///
    /// The window does not follow the open toggles, so bars keep their
    /// positions while the controls change.
    pub fn new(items: Vec<TimedItem>, range: Range, margin: Duration) -> Result<Self, AxisError> {
        let window = derive_window(&items, &range, margin)?;
        Ok(Self {
            items,
            range,
            window,
        })
    }

    pub const fn window(&self) -> &DisplayWindow {
        &self.window
    }

    /// Classifies every item and lays out the rows for `controls`.
    pub fn view(&self, controls: Controls) -> TimelineView {
        let effective = self.range.open(controls.open_start, controls.open_end);
        let window = &self.window;

        let left = effective.start.map_or(0.0, |start| window.project(start));
        let right = effective.end.map_or(100.0, |end| window.project(end));
        let filter = FilterRow {
            effective,
            bar: Bar {
                left,
                width: (right - left).max(0.0),
            },
        };

        let boundaries = [(Side::Start, effective.start), (Side::End, effective.end)]
            .into_iter()
            .filter_map(|(side, bound)| {
                bound.map(|at| BoundaryLine {
                    side,
                    at,
                    position: window.project(at),
                })
            })
            .collect();

        let rows = self
            .items
            .iter()
            .map(|item| {
                let verdict = Verdict::evaluate(item, &effective);
                let inside = verdict.selected(controls.algorithm);
                tracing::trace!(
                    id = %item.id,
                    inclusive = verdict.inclusive,
                    contained = verdict.contained,
                    inside,
                    "classified item"
                );
                let left = window.project(item.start);
                ItemRow {
                    id: item.id,
                    label: item.label.clone(),
                    start: item.start,
                    end: item.end,
                    bar: Bar {
                        left,
                        width: window.project(item.end) - left,
                    },
                    verdict,
                    inside,
                }
            })
            .collect();

        TimelineView {
            window: *window,
            controls,
            filter,
            boundaries,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::DEFAULT_MARGIN_MS;
    use crate::dataset::{demo_items, demo_range};

    fn demo() -> Timeline {
        Timeline::new(
            demo_items().unwrap(),
            demo_range(),
            Duration::milliseconds(DEFAULT_MARGIN_MS),
        )
        .unwrap()
    }

    /// Percent position of `hour` on the demo day (window is 66h from Jan 14 04:00).
    fn pct(hour: i32) -> f64 {
        f64::from(hour + 20) / 66.0 * 100.0
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn window_is_independent_of_controls() {
        let timeline = demo();
        let closed = timeline.view(Controls::default());
        let open = timeline.view(Controls {
            algorithm: Algorithm::FullyContained,
            open_start: true,
            open_end: true,
        });
        assert_eq!(closed.window, open.window);
    }

    #[test]
    fn closed_filter_bar_spans_range() {
        let view = demo().view(Controls::default());
        assert!(close(view.filter.bar.left, pct(9)));
        assert!(close(view.filter.bar.right(), pct(17)));
        assert_eq!(view.boundaries.len(), 2);
        assert_eq!(view.boundaries[0].side, Side::Start);
        assert!(close(view.boundaries[0].position, pct(9)));
        assert_eq!(view.boundaries[1].side, Side::End);
        assert!(close(view.boundaries[1].position, pct(17)));
    }

    #[test]
    fn open_sides_stretch_filter_bar_to_edges() {
        let timeline = demo();

        let view = timeline.view(Controls {
            open_start: true,
            ..Controls::default()
        });
        assert!(close(view.filter.bar.left, 0.0));
        assert!(close(view.filter.bar.right(), pct(17)));
        assert_eq!(view.boundaries.len(), 1);
        assert_eq!(view.boundaries[0].side, Side::End);

        let view = timeline.view(Controls {
            open_start: true,
            open_end: true,
            ..Controls::default()
        });
        assert!(close(view.filter.bar.left, 0.0));
        assert!(close(view.filter.bar.width, 100.0));
        assert!(view.boundaries.is_empty());
    }

    #[test]
    fn item_bars_follow_projection() {
        let view = demo().view(Controls::default());
        let first = &view.rows[0];
        assert_eq!(first.label, "Case 1");
        assert!(close(first.bar.left, pct(7)));
        assert!(close(first.bar.right(), pct(19)));
    }

    #[test]
    fn inside_follows_selected_algorithm() {
        let timeline = demo();

        let inclusive: Vec<_> = timeline
            .view(Controls::default())
            .rows
            .iter()
            .map(|row| row.inside)
            .collect();
        assert_eq!(inclusive, vec![true, false, true, true, false, true]);

        let contained: Vec<_> = timeline
            .view(Controls {
                algorithm: Algorithm::FullyContained,
                ..Controls::default()
            })
            .rows
            .iter()
            .map(|row| row.inside)
            .collect();
        assert_eq!(contained, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn open_start_reclassifies_rows() {
        let view = demo().view(Controls {
            open_start: true,
            ..Controls::default()
        });
        let verdicts: Vec<_> = view
            .rows
            .iter()
            .map(|row| (row.verdict.inclusive, row.verdict.contained))
            .collect();
        assert_eq!(
            verdicts,
            vec![
                (true, false),
                (false, false),
                (true, true),
                (true, false),
                (true, true),
                (true, true),
            ]
        );
    }

    #[test]
    fn fully_open_range_marks_everything_outside() {
        let view = demo().view(Controls {
            open_start: true,
            open_end: true,
            ..Controls::default()
        });
        assert!(view.rows.iter().all(|row| !row.inside));
    }

    #[test]
    fn empty_dataset_fails_to_build() {
        let result = Timeline::new(
            Vec::new(),
            demo_range(),
            Duration::milliseconds(DEFAULT_MARGIN_MS),
        );
        assert!(matches!(result, Err(AxisError::InvalidInput { .. })));
    }
}
