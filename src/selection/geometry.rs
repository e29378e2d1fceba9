//! Visual feedback derived from a selection
//!
//! Everything here is a pure function of the selection state, so a host can
//! redraw from scratch on every update without keeping widget state around.

use crate::domain::{HandleKind, LogicalRect, LogicalSize, Selection};

/// Shown before anything has been selected
pub const INSTRUCTIONS_START: &str =
    "Click and drag to select region. Press Enter to capture, Escape to cancel.";

/// Shown once a selection exists
pub const INSTRUCTIONS_ADJUST: &str =
    "Drag handles to resize. Press Enter to capture, Escape to cancel.";

/// Rectangles a host draws to show the current selection, in logical units
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionGeometry {
    /// Dimmed regions outside the selection: top, bottom, left, right
    pub dims: [LogicalRect; 4],
    /// Selection outline, absent until a selection exists
    pub outline: Option<LogicalRect>,
    /// Handle squares in [`HandleKind::RESIZE_HANDLES`] order
    pub handles: Option<[LogicalRect; 8]>,
    pub instructions: &'static str,
}

impl SelectionGeometry {
    /// Compute the feedback for `selection` on a screen of size `screen`
    ///
    /// Without a selection the whole screen is dimmed. Handles stay hidden
    /// until the selection has a non-zero extent, so a fresh click does not
    /// flash handles at the pointer.
    pub fn compute(selection: &Selection, screen: LogicalSize, handle_size: f32) -> Self {
        let empty = LogicalRect::default();
        if !selection.has_selection {
            return Self {
                dims: [
                    LogicalRect::from_xywh(0.0, 0.0, screen.width, screen.height),
                    empty,
                    empty,
                    empty,
                ],
                outline: None,
                handles: None,
                instructions: INSTRUCTIONS_START,
            };
        }

        let b = selection.normalized_bounds();
        let (min, max) = (b.min, b.max);
        let sel_height = b.height();

        let dims = [
            LogicalRect::from_xywh(0.0, 0.0, screen.width, min.y.max(0.0)),
            LogicalRect::from_xywh(0.0, max.y, screen.width, (screen.height - max.y).max(0.0)),
            LogicalRect::from_xywh(0.0, min.y, min.x.max(0.0), sel_height),
            LogicalRect::from_xywh(max.x, min.y, (screen.width - max.x).max(0.0), sel_height),
        ];

        if b.width() == 0.0 && b.height() == 0.0 {
            return Self {
                dims,
                outline: Some(b),
                handles: None,
                instructions: INSTRUCTIONS_START,
            };
        }

        let half = handle_size / 2.0;
        let handles = HandleKind::RESIZE_HANDLES.map(|kind| {
            let anchor = kind.anchor_on(b).unwrap_or(min);
            LogicalRect::from_xywh(anchor.x - half, anchor.y - half, handle_size, handle_size)
        });

        Self {
            dims,
            outline: Some(b),
            handles: Some(handles),
            instructions: INSTRUCTIONS_ADJUST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogicalPoint;

    const SCREEN: LogicalSize = LogicalSize::new(400.0, 300.0);

    fn selection(x0: f32, y0: f32, x1: f32, y1: f32) -> Selection {
        Selection {
            has_selection: true,
            min: LogicalPoint::new(x0, y0),
            max: LogicalPoint::new(x1, y1),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_selection_dims_everything() {
        let g = SelectionGeometry::compute(&Selection::default(), SCREEN, 8.0);
        assert_eq!(g.dims[0], LogicalRect::from_xywh(0.0, 0.0, 400.0, 300.0));
        assert!(g.outline.is_none());
        assert!(g.handles.is_none());
        assert_eq!(g.instructions, INSTRUCTIONS_START);
    }

    #[test]
    fn test_dims_surround_selection() {
        let g = SelectionGeometry::compute(&selection(110.0, 60.0, 10.0, 10.0), SCREEN, 8.0);
        let [top, bottom, left, right] = g.dims;
        assert_eq!(top, LogicalRect::from_xywh(0.0, 0.0, 400.0, 10.0));
        assert_eq!(bottom, LogicalRect::from_xywh(0.0, 60.0, 400.0, 240.0));
        assert_eq!(left, LogicalRect::from_xywh(0.0, 10.0, 10.0, 50.0));
        assert_eq!(right, LogicalRect::from_xywh(110.0, 10.0, 290.0, 50.0));
        assert_eq!(
            g.outline,
            Some(LogicalRect::from_xywh(10.0, 10.0, 100.0, 50.0))
        );
        assert_eq!(g.instructions, INSTRUCTIONS_ADJUST);
    }

    #[test]
    fn test_handles_are_centred_on_anchors() {
        let g = SelectionGeometry::compute(&selection(10.0, 10.0, 110.0, 60.0), SCREEN, 8.0);
        let handles = g.handles.unwrap();
        assert_eq!(handles[0], LogicalRect::from_xywh(6.0, 6.0, 8.0, 8.0));
        assert_eq!(handles[3], LogicalRect::from_xywh(106.0, 56.0, 8.0, 8.0));
        // Top edge midpoint
        assert_eq!(handles[4], LogicalRect::from_xywh(56.0, 6.0, 8.0, 8.0));
        // Right edge midpoint
        assert_eq!(handles[7], LogicalRect::from_xywh(106.0, 31.0, 8.0, 8.0));
    }

    #[test]
    fn test_collapsed_selection_hides_handles() {
        let g = SelectionGeometry::compute(&selection(50.0, 50.0, 50.0, 50.0), SCREEN, 8.0);
        assert!(g.handles.is_none());
        assert!(g.outline.is_some());
    }

    #[test]
    fn test_offscreen_selection_clamps_dims() {
        let g = SelectionGeometry::compute(&selection(-20.0, -20.0, 500.0, 400.0), SCREEN, 8.0);
        for dim in g.dims {
            assert!(dim.max.x >= dim.min.x && dim.max.y >= dim.min.y, "{dim:?}");
        }
        assert_eq!(g.dims[0].height(), 0.0);
        assert_eq!(g.dims[1].height(), 0.0);
    }
}
