//! Image rendering for annotations
//!
//! These functions burn annotations into an `RgbaImage`, used for both the
//! live preview and the exported result.

use image::RgbaImage;

use super::raster;
use crate::domain::{Annotation, ArrowAnnotation, RectAnnotation};

/// Draw a single annotation
pub fn draw_annotation(img: &mut RgbaImage, annotation: &Annotation) {
    match annotation {
        Annotation::Arrow(arrow) => draw_arrow_on_image(img, arrow),
        Annotation::Rect(rect) => draw_rect_on_image(img, rect),
    }
}

/// Draw all annotations in order
///
/// Later annotations are drawn over earlier ones.
pub fn draw_annotations_in_order(img: &mut RgbaImage, annotations: &[Annotation]) {
    for annotation in annotations {
        draw_annotation(img, annotation);
    }
}

fn draw_arrow_on_image(img: &mut RgbaImage, arrow: &ArrowAnnotation) {
    raster::draw_arrow(
        img,
        arrow.start,
        arrow.end,
        arrow.color.to_rgba(),
        arrow.stroke_width,
    );
}

fn draw_rect_on_image(img: &mut RgbaImage, rect: &RectAnnotation) {
    let color = rect.color.to_rgba();
    if rect.filled {
        raster::fill_rect_over(img, rect.rect, color);
    } else {
        raster::draw_rect_outline(img, rect.rect, color, rect.stroke_width);
    }
}
