//! Captured screenshot image and the crop step

use image::RgbaImage;

use crate::domain::{LogicalSize, Rect};
use crate::render::raster::image_rect;
use crate::{Error, Result};

/// A captured screenshot with the scale factor of the display it came from
#[derive(Clone, Debug)]
pub struct CapturedImage {
    pub rgba: RgbaImage,
    pub scale_factor: f32,
}

impl CapturedImage {
    /// Wrap an already decoded image
    pub fn new(rgba: RgbaImage, scale_factor: f32) -> Result<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(Error::InvalidScaleFactor(scale_factor));
        }
        log::debug!(
            "CapturedImage: {}x{} pixels at scale {}",
            rgba.width(),
            rgba.height(),
            scale_factor
        );
        Ok(Self { rgba, scale_factor })
    }

    /// Build from tightly packed RGBA8 bytes
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>, scale_factor: f32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        let actual = bytes.len();
        let rgba = RgbaImage::from_raw(width, height, bytes).filter(|_| actual == expected);
        let Some(rgba) = rgba else {
            return Err(Error::BufferSize {
                width,
                height,
                expected,
                actual,
            });
        };
        Self::new(rgba, scale_factor)
    }

    /// Get the width of the image
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    /// Get the height of the image
    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Size of the capture in logical units
    pub fn logical_size(&self) -> LogicalSize {
        LogicalSize::from_pixels(self.width(), self.height(), self.scale_factor)
    }

    /// Copy `region` into a new image whose origin is `(0, 0)`
    ///
    /// The region is clipped to the image first; a region with nothing left
    /// after clipping is an error.
    pub fn crop(&self, region: Rect) -> Result<RgbaImage> {
        let Some(clipped) = region.intersect(image_rect(&self.rgba)) else {
            log::warn!(
                "Rejected crop {:?} outside {}x{} image",
                region,
                self.width(),
                self.height()
            );
            return Err(Error::EmptyRegion(region));
        };

        log::debug!(
            "Cropping {}x{} at ({}, {})",
            clipped.width(),
            clipped.height(),
            clipped.min.x,
            clipped.min.y
        );
        let view = image::imageops::crop_imm(
            &self.rgba,
            clipped.min.x as u32,
            clipped.min.y as u32,
            clipped.width() as u32,
            clipped.height() as u32,
        );
        Ok(view.to_image())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn gradient(w: u32, h: u32) -> CapturedImage {
        let img = RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        CapturedImage::new(img, 1.0).unwrap()
    }

    #[test]
    fn test_crop_copies_region_to_origin() {
        let cap = gradient(100, 80);
        let out = cap.crop(Rect::from_coords(10, 20, 40, 60)).unwrap();
        assert_eq!(out.dimensions(), (30, 40));
        assert_eq!(*out.get_pixel(0, 0), Rgba([10, 20, 0, 255]));
        assert_eq!(*out.get_pixel(29, 39), Rgba([39, 59, 0, 255]));
    }

    #[test]
    fn test_crop_clips_to_image() {
        let cap = gradient(100, 80);
        let out = cap.crop(Rect::from_coords(-10, 70, 50, 200)).unwrap();
        assert_eq!(out.dimensions(), (50, 10));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 70, 0, 255]));
    }

    #[test]
    fn test_empty_crop_is_rejected() {
        let cap = gradient(100, 80);
        for region in [
            Rect::from_coords(30, 40, 30, 40),
            Rect::from_coords(10, 10, 50, 10),
            Rect::from_coords(200, 200, 300, 300),
        ] {
            assert!(matches!(cap.crop(region), Err(Error::EmptyRegion(r)) if r == region));
        }
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(CapturedImage::from_raw(2, 2, vec![0; 16], 1.0).is_ok());
        let err = CapturedImage::from_raw(2, 2, vec![0; 15], 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 16,
                actual: 15,
                ..
            }
        ));
        // Extra trailing bytes are not silently accepted either
        assert!(CapturedImage::from_raw(2, 2, vec![0; 20], 1.0).is_err());
    }

    #[test]
    fn test_scale_factor_is_validated() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = CapturedImage::new(RgbaImage::new(1, 1), scale).unwrap_err();
            assert!(matches!(err, Error::InvalidScaleFactor(_)));
        }
    }

    #[test]
    fn test_logical_size() {
        let cap = CapturedImage::new(RgbaImage::new(200, 100), 2.0).unwrap();
        assert_eq!(cap.logical_size(), LogicalSize::new(100.0, 50.0));
    }
}
