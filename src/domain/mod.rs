//! Pure domain types with minimal dependencies
//!
//! This module contains the geometry, selection and annotation types used
//! throughout the crate. Drawing lives in [`crate::render`].

pub mod annotation;
pub mod geometry;
pub mod selection;

pub use annotation::*;
pub use geometry::*;
pub use selection::*;
