//! Region selection and annotation core for screenshot tools
//!
//! A host hands a [`CapturedImage`] to a [`SelectionController`], crops the
//! confirmed rectangle, and lets the [`Editor`] draw arrows and rectangles on
//! the crop before taking the flattened result. [`CaptureSession`] wires the
//! whole flow together. Nothing here talks to a display server or the
//! filesystem.

pub mod annotations;
pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod selection;
pub mod session;

pub use annotations::{AnnotationModel, DrawEvent, Editor};
pub use capture::CapturedImage;
pub use config::{CoreConfig, SelectionTheme, ShapeColor, ShapeTool};
pub use error::{Error, Result};
pub use render::compositor::Compositor;
pub use selection::{
    SelectionController, SelectionEvent, SelectionGeometry, SelectionKey, SelectionOutcome,
};
pub use session::{CaptureSession, Stage};
