//! Annotation rendering module
//!
//! This module contains:
//! - Geometry calculations shared between bounds and drawing
//! - Pixel-level raster primitives
//! - Image rendering of annotations
//! - The layered compositor used by the editor
//! - Selection frame rendering using tiny-skia

pub mod compositor;
pub mod geometry;
pub mod image;
pub mod overlay;
pub mod raster;
