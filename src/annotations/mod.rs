//! Annotation editing
//!
//! This module provides:
//! - The ordered annotation model
//! - The editor that turns pointer drags into annotations

pub mod editor;
pub mod model;

pub use editor::{DrawEvent, Editor};
pub use model::AnnotationModel;
