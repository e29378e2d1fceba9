//! Event-driven region selection
//!
//! The controller consumes pointer and key events already translated to
//! logical coordinates and produces a pixel rectangle once the user confirms.

use std::fmt;

use crate::config::{CoreConfig, DEFAULT_HANDLE_SIZE};
use crate::domain::{HandleKind, LogicalPoint, LogicalSize, Rect, Selection, SelectionPhase};

use super::geometry::SelectionGeometry;

/// Keys the selector reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    Confirm,
    Cancel,
}

/// Input to [`SelectionController::handle_event`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionEvent {
    PointerDown(LogicalPoint),
    PointerDrag(LogicalPoint),
    PointerUp,
    /// Right click anywhere cancels
    SecondaryClick,
    KeyPress(SelectionKey),
}

/// Terminal result of a selection session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Normalized selection in pixels of the captured bitmap
    Confirmed(Rect),
    Cancelled,
}

/// Region selection state machine
///
/// Once an outcome has been produced the controller ignores further input.
pub struct SelectionController {
    selection: Selection,
    scale_factor: f32,
    screen: LogicalSize,
    handle_size: f32,
    finished: bool,
    on_select: Option<Box<dyn FnMut(Rect)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
    on_change: Option<Box<dyn FnMut(&SelectionGeometry)>>,
}

impl SelectionController {
    /// Create a controller for a screen of `screen` logical units
    pub fn new(screen: LogicalSize, scale_factor: f32) -> Self {
        Self {
            selection: Selection::default(),
            scale_factor,
            screen,
            handle_size: DEFAULT_HANDLE_SIZE,
            finished: false,
            on_select: None,
            on_cancel: None,
            on_change: None,
        }
    }

    /// Create a controller using the handle size from `config`
    pub fn from_config(screen: LogicalSize, scale_factor: f32, config: &CoreConfig) -> Self {
        Self::new(screen, scale_factor).handle_size(config.handle_size)
    }

    /// Set the handle size, which is also the hit radius
    pub fn handle_size(mut self, size: f32) -> Self {
        self.handle_size = size;
        self
    }

    /// Called with the pixel rectangle when the selection is confirmed
    pub fn on_select(mut self, f: impl FnMut(Rect) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Called when the selection is cancelled
    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called with fresh feedback geometry whenever the selection changes
    pub fn on_change(mut self, f: impl FnMut(&SelectionGeometry) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feedback geometry for the current state
    pub fn geometry(&self) -> SelectionGeometry {
        SelectionGeometry::compute(&self.selection, self.screen, self.handle_size)
    }

    /// Feed one input event, returning an outcome when the session ends
    pub fn handle_event(&mut self, event: SelectionEvent) -> Option<SelectionOutcome> {
        if self.finished {
            return None;
        }

        match event {
            SelectionEvent::PointerDown(pos) => {
                let handle = self.selection.begin_drag(pos, self.handle_size);
                log::debug!(
                    "Selection drag started at ({}, {}) on {:?}",
                    pos.x,
                    pos.y,
                    handle
                );
                if handle == HandleKind::None {
                    self.notify_change();
                }
                None
            }
            SelectionEvent::PointerDrag(pos) => {
                if self.selection.drag_to(pos) {
                    self.notify_change();
                }
                None
            }
            SelectionEvent::PointerUp => {
                if self.selection.drag.active {
                    self.selection.end_drag();
                    log::debug!("Selection drag ended: {:?}", self.selection.normalized_bounds());
                }
                None
            }
            SelectionEvent::KeyPress(SelectionKey::Confirm) => self.confirm(),
            SelectionEvent::SecondaryClick | SelectionEvent::KeyPress(SelectionKey::Cancel) => {
                self.cancel()
            }
        }
    }

    /// Confirm the current selection; does nothing without one
    pub fn confirm(&mut self) -> Option<SelectionOutcome> {
        if self.finished || !self.selection.has_selection {
            return None;
        }

        self.selection.end_drag();
        let rect = self.selection.to_pixel_rect(self.scale_factor);
        log::debug!(
            "Selection confirmed: {}x{} at ({}, {})",
            rect.width(),
            rect.height(),
            rect.min.x,
            rect.min.y
        );

        self.finished = true;
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(rect);
        }
        Some(SelectionOutcome::Confirmed(rect))
    }

    /// Abandon the selection; does nothing once an outcome was produced
    pub fn cancel(&mut self) -> Option<SelectionOutcome> {
        if self.finished {
            return None;
        }

        log::debug!("Selection cancelled");
        self.selection.reset();
        self.finished = true;
        if let Some(on_cancel) = self.on_cancel.as_mut() {
            on_cancel();
        }
        Some(SelectionOutcome::Cancelled)
    }

    fn notify_change(&mut self) {
        if self.on_change.is_none() {
            return;
        }
        let geometry = self.geometry();
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&geometry);
        }
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .field("scale_factor", &self.scale_factor)
            .field("screen", &self.screen)
            .field("handle_size", &self.handle_size)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn controller(scale: f32) -> SelectionController {
        SelectionController::new(LogicalSize::new(800.0, 600.0), scale)
    }

    fn drag(c: &mut SelectionController, from: (f32, f32), to: (f32, f32)) {
        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(from.0, from.1)));
        c.handle_event(SelectionEvent::PointerDrag(LogicalPoint::new(to.0, to.1)));
        c.handle_event(SelectionEvent::PointerUp);
    }

    #[test]
    fn test_drag_and_confirm_on_hidpi() {
        let mut c = controller(2.0);
        drag(&mut c, (10.0, 10.0), (110.0, 60.0));
        assert_eq!(c.phase(), SelectionPhase::Idle);

        let outcome = c.handle_event(SelectionEvent::KeyPress(SelectionKey::Confirm));
        assert_eq!(
            outcome,
            Some(SelectionOutcome::Confirmed(Rect::from_coords(20, 20, 220, 120)))
        );
        assert!(c.is_finished());
    }

    #[test]
    fn test_confirm_without_selection_is_ignored() {
        let mut c = controller(1.0);
        assert_eq!(c.handle_event(SelectionEvent::KeyPress(SelectionKey::Confirm)), None);
        assert!(!c.is_finished());
    }

    #[test]
    fn test_reverse_drag_confirms_normalized() {
        let mut c = controller(1.0);
        drag(&mut c, (200.0, 150.0), (50.0, 40.0));
        assert_eq!(
            c.confirm(),
            Some(SelectionOutcome::Confirmed(Rect::from_coords(50, 40, 200, 150)))
        );
    }

    #[test]
    fn test_confirm_rounds_fractional_pixels() {
        let mut c = controller(1.5);
        drag(&mut c, (10.3, 10.0), (20.0, 20.5));
        // 15.45 -> 15, 30.75 -> 31
        assert_eq!(
            c.confirm(),
            Some(SelectionOutcome::Confirmed(Rect::from_coords(15, 15, 30, 31)))
        );
    }

    #[test]
    fn test_phases_during_interaction() {
        let mut c = controller(1.0);
        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(10.0, 10.0)));
        assert_eq!(c.phase(), SelectionPhase::Creating);
        c.handle_event(SelectionEvent::PointerDrag(LogicalPoint::new(100.0, 100.0)));
        c.handle_event(SelectionEvent::PointerUp);

        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(100.0, 100.0)));
        assert_eq!(c.phase(), SelectionPhase::Resizing);
        c.handle_event(SelectionEvent::PointerUp);

        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(50.0, 50.0)));
        assert_eq!(c.phase(), SelectionPhase::Moving);
        c.handle_event(SelectionEvent::PointerUp);
        assert_eq!(c.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_resize_and_move_follow_anchor() {
        let mut c = controller(1.0);
        drag(&mut c, (100.0, 100.0), (200.0, 200.0));
        // Grab the bottom-right corner and pull it out
        drag(&mut c, (201.0, 199.0), (251.0, 219.0));
        assert!(c.confirm().is_some());
        assert_eq!(c.selection().max, LogicalPoint::new(250.0, 220.0));

        let mut c = controller(1.0);
        drag(&mut c, (100.0, 100.0), (200.0, 200.0));
        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(150.0, 150.0)));
        // Intermediate updates must not accumulate
        for step in 1..=10 {
            let x = 150.0 + step as f32 * 3.0;
            c.handle_event(SelectionEvent::PointerDrag(LogicalPoint::new(x, 150.0)));
        }
        c.handle_event(SelectionEvent::PointerUp);
        assert_eq!(c.selection().min, LogicalPoint::new(130.0, 100.0));
        assert_eq!(c.selection().max, LogicalPoint::new(230.0, 200.0));
    }

    #[test]
    fn test_cancel_resets_and_finishes() {
        let mut c = controller(1.0);
        drag(&mut c, (10.0, 10.0), (50.0, 50.0));
        let outcome = c.handle_event(SelectionEvent::KeyPress(SelectionKey::Cancel));
        assert_eq!(outcome, Some(SelectionOutcome::Cancelled));
        assert!(!c.selection().has_selection);

        // Finished controllers ignore input
        drag(&mut c, (10.0, 10.0), (50.0, 50.0));
        assert!(!c.selection().has_selection);
        assert_eq!(c.confirm(), None);
    }

    #[test]
    fn test_cancel_after_confirm_is_ignored() {
        let cancelled = Rc::new(RefCell::new(false));
        let mut c = controller(1.0).on_cancel({
            let cancelled = cancelled.clone();
            move || *cancelled.borrow_mut() = true
        });
        drag(&mut c, (10.0, 10.0), (50.0, 50.0));
        assert!(matches!(c.confirm(), Some(SelectionOutcome::Confirmed(_))));

        assert_eq!(c.cancel(), None);
        assert_eq!(c.handle_event(SelectionEvent::SecondaryClick), None);
        assert!(!*cancelled.borrow());
        assert!(c.selection().has_selection);
        assert_eq!(c.confirm(), None);
    }

    #[test]
    fn test_second_cancel_is_ignored() {
        let mut c = controller(1.0);
        assert_eq!(c.cancel(), Some(SelectionOutcome::Cancelled));
        assert_eq!(c.cancel(), None);
    }

    #[test]
    fn test_cancel_without_selection() {
        let mut c = controller(1.0);
        assert_eq!(
            c.handle_event(SelectionEvent::KeyPress(SelectionKey::Cancel)),
            Some(SelectionOutcome::Cancelled)
        );
    }

    #[test]
    fn test_secondary_click_cancels() {
        let mut c = controller(1.0);
        drag(&mut c, (10.0, 10.0), (50.0, 50.0));
        assert_eq!(
            c.handle_event(SelectionEvent::SecondaryClick),
            Some(SelectionOutcome::Cancelled)
        );
    }

    #[test]
    fn test_zero_area_selection_is_confirmed() {
        let mut c = controller(1.0);
        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(30.0, 40.0)));
        c.handle_event(SelectionEvent::PointerUp);
        assert_eq!(
            c.confirm(),
            Some(SelectionOutcome::Confirmed(Rect::from_coords(30, 40, 30, 40)))
        );
    }

    #[test]
    fn test_callbacks_fire() {
        let selected = Rc::new(RefCell::new(None));
        let changes = Rc::new(RefCell::new(0));
        let cancelled = Rc::new(RefCell::new(false));

        let mut c = controller(2.0)
            .on_select({
                let selected = selected.clone();
                move |r| *selected.borrow_mut() = Some(r)
            })
            .on_change({
                let changes = changes.clone();
                move |_| *changes.borrow_mut() += 1
            })
            .on_cancel({
                let cancelled = cancelled.clone();
                move || *cancelled.borrow_mut() = true
            });

        drag(&mut c, (10.0, 10.0), (20.0, 20.0));
        // Pointer down on empty space plus one drag update
        assert_eq!(*changes.borrow(), 2);

        c.confirm();
        assert_eq!(*selected.borrow(), Some(Rect::from_coords(20, 20, 40, 40)));
        assert!(!*cancelled.borrow());
    }

    #[test]
    fn test_geometry_tracks_selection() {
        let mut c = controller(1.0);
        assert!(c.geometry().outline.is_none());
        drag(&mut c, (10.0, 10.0), (110.0, 60.0));
        let g = c.geometry();
        assert_eq!(g.outline.map(|o| o.width()), Some(100.0));
        assert!(g.handles.is_some());
    }

    #[test]
    fn test_handle_size_from_config() {
        let config = CoreConfig {
            handle_size: 20.0,
            ..Default::default()
        };
        let mut c = SelectionController::from_config(LogicalSize::new(800.0, 600.0), 1.0, &config);
        drag(&mut c, (100.0, 100.0), (200.0, 200.0));
        // 15 units away is only a hit with the larger radius
        c.handle_event(SelectionEvent::PointerDown(LogicalPoint::new(215.0, 215.0)));
        assert_eq!(c.phase(), SelectionPhase::Resizing);
    }
}
