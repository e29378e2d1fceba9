//! Selection state and the pure geometry of selection drags

use super::geometry::{LogicalPoint, LogicalRect, Rect};

/// Part of the selection grabbed by the pointer
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Nothing grabbed; a drag from here creates a new selection
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    /// Interior of the selection, drags translate it
    Move,
}

impl HandleKind {
    /// The eight resize handles in hit-test priority order
    pub const RESIZE_HANDLES: [HandleKind; 8] = [
        HandleKind::TopLeft,
        HandleKind::TopRight,
        HandleKind::BottomLeft,
        HandleKind::BottomRight,
        HandleKind::Top,
        HandleKind::Bottom,
        HandleKind::Left,
        HandleKind::Right,
    ];

    /// Position of this handle on the given (normalized) bounds
    ///
    /// Returns `None` for [`HandleKind::None`] and [`HandleKind::Move`].
    pub fn anchor_on(self, bounds: LogicalRect) -> Option<LogicalPoint> {
        let b = bounds.normalized();
        let mid = b.center();
        let p = match self {
            HandleKind::TopLeft => b.min,
            HandleKind::TopRight => LogicalPoint::new(b.max.x, b.min.y),
            HandleKind::BottomLeft => LogicalPoint::new(b.min.x, b.max.y),
            HandleKind::BottomRight => b.max,
            HandleKind::Top => LogicalPoint::new(mid.x, b.min.y),
            HandleKind::Bottom => LogicalPoint::new(mid.x, b.max.y),
            HandleKind::Left => LogicalPoint::new(b.min.x, mid.y),
            HandleKind::Right => LogicalPoint::new(b.max.x, mid.y),
            HandleKind::None | HandleKind::Move => return None,
        };
        Some(p)
    }
}

/// Interaction phase derived from the drag state
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Creating,
    Resizing,
    Moving,
}

/// Anchor captured when a drag starts
///
/// Every drag update is computed from these values, never from the previous
/// frame, so repeated updates cannot accumulate drift.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub handle: HandleKind,
    pub anchor_pointer: LogicalPoint,
    pub anchor_min: LogicalPoint,
    pub anchor_max: LogicalPoint,
}

/// Rectangle selection in logical coordinates
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Selection {
    pub has_selection: bool,
    pub min: LogicalPoint,
    pub max: LogicalPoint,
    pub drag: DragState,
}

impl Selection {
    /// Selection bounds with min/max properly ordered
    pub fn normalized_bounds(&self) -> LogicalRect {
        LogicalRect::new(self.min, self.max).normalized()
    }

    pub fn phase(&self) -> SelectionPhase {
        if !self.drag.active {
            return SelectionPhase::Idle;
        }
        match self.drag.handle {
            HandleKind::None => SelectionPhase::Creating,
            HandleKind::Move => SelectionPhase::Moving,
            _ => SelectionPhase::Resizing,
        }
    }

    /// Find the handle under `pos`
    ///
    /// Corners are checked before edge midpoints, and both before the
    /// interior, so overlapping zones always resolve the same way. A handle
    /// is hit when both axis distances are below `radius`.
    pub fn hit_test(&self, pos: LogicalPoint, radius: f32) -> HandleKind {
        if !self.has_selection {
            return HandleKind::None;
        }

        let bounds = self.normalized_bounds();
        for handle in HandleKind::RESIZE_HANDLES {
            if let Some(anchor) = handle.anchor_on(bounds)
                && (pos.x - anchor.x).abs() < radius
                && (pos.y - anchor.y).abs() < radius
            {
                return handle;
            }
        }

        if bounds.contains(pos) {
            HandleKind::Move
        } else {
            HandleKind::None
        }
    }

    /// Start a drag at `pos`, returning the handle that was grabbed
    ///
    /// Missing every handle starts a new selection collapsed onto `pos`.
    pub fn begin_drag(&mut self, pos: LogicalPoint, radius: f32) -> HandleKind {
        let handle = self.hit_test(pos, radius);

        if handle == HandleKind::None {
            self.has_selection = true;
            self.min = pos;
            self.max = pos;
        } else {
            // Anchor on ordered corners so each handle moves the edge it sits on
            let bounds = self.normalized_bounds();
            self.min = bounds.min;
            self.max = bounds.max;
        }

        self.drag = DragState {
            active: true,
            handle,
            anchor_pointer: pos,
            anchor_min: self.min,
            anchor_max: self.max,
        };
        handle
    }

    /// Apply a pointer move to the active drag
    ///
    /// Returns false when no drag is active.
    pub fn drag_to(&mut self, pos: LogicalPoint) -> bool {
        if !self.drag.active {
            return false;
        }

        let DragState {
            handle,
            anchor_pointer,
            anchor_min: amin,
            anchor_max: amax,
            ..
        } = self.drag;
        let (dx, dy) = pos.delta_from(anchor_pointer);

        match handle {
            HandleKind::None => self.max = pos,
            HandleKind::TopLeft => self.min = amin.offset(dx, dy),
            HandleKind::TopRight => {
                self.max = LogicalPoint::new(amax.x + dx, amax.y);
                self.min = LogicalPoint::new(amin.x, amin.y + dy);
            }
            HandleKind::BottomLeft => {
                self.min = LogicalPoint::new(amin.x + dx, amin.y);
                self.max = LogicalPoint::new(amax.x, amax.y + dy);
            }
            HandleKind::BottomRight => self.max = amax.offset(dx, dy),
            HandleKind::Top => self.min = LogicalPoint::new(amin.x, amin.y + dy),
            HandleKind::Bottom => self.max = LogicalPoint::new(amax.x, amax.y + dy),
            HandleKind::Left => self.min = LogicalPoint::new(amin.x + dx, amin.y),
            HandleKind::Right => self.max = LogicalPoint::new(amax.x + dx, amax.y),
            HandleKind::Move => {
                self.min = amin.offset(dx, dy);
                self.max = amax.offset(dx, dy);
            }
        }
        true
    }

    /// Finish the active drag, keeping the selection
    pub fn end_drag(&mut self) {
        self.drag.active = false;
    }

    /// Discard the selection entirely
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pixel bounds of the selection, `round(logical * scale_factor)`
    pub fn to_pixel_rect(&self, scale_factor: f32) -> Rect {
        self.normalized_bounds().to_pixel_rect(scale_factor)
    }
}
