//! Screenshot session management module
//!
//! This module contains:
//! - The capture session tying selection, cropping and annotation together
//! - Keyboard shortcut mapping

pub mod shortcuts;
pub mod state;

pub use shortcuts::{EditorCommand, Key};
pub use state::{CaptureSession, Stage};
