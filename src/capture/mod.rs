//! Screenshot image type and cropping

pub mod image;

pub use self::image::CapturedImage;
