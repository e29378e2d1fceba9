//! Error type for the fallible edges of the core
//!
//! Selection, rasterization and compositing never fail. Errors only come from
//! building a capture from raw bytes, cropping it, or allocating a pixmap.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested region does not overlap the captured image
    #[error("selection region {0:?} is empty or outside the captured image")]
    EmptyRegion(crate::domain::Rect),

    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f32),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}
