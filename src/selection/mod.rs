//! Interactive region selection
//!
//! [`SelectionController`] drives the state machine in [`crate::domain::selection`]
//! from input events; [`SelectionGeometry`] describes what to draw for it.

pub mod controller;
pub mod geometry;

pub use controller::{SelectionController, SelectionEvent, SelectionKey, SelectionOutcome};
pub use geometry::SelectionGeometry;
