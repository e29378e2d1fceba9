//! Annotation types for drawing on screenshots
//!
//! All annotation types store coordinates in image pixel coordinates and a
//! stroke width that is already scaled for the display.

use image::RgbaImage;

use super::geometry::{Point, Rect};
use crate::config::ShapeColor;
use crate::render::geometry::{arrow, effective_stroke};
use crate::render::image as draw;

/// Arrow annotation for drawing on screenshots
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowAnnotation {
    pub start: Point,
    /// Tip of the arrow; the head is drawn here
    pub end: Point,
    pub color: ShapeColor,
    /// Stroke width in pixels
    pub stroke_width: i32,
}

impl ArrowAnnotation {
    pub fn new(start: Point, end: Point, color: ShapeColor, stroke_width: i32) -> Self {
        Self {
            start,
            end,
            color,
            stroke_width,
        }
    }

    /// Bounding box of the shaft and head, grown by the stroke width
    pub fn bounds(&self) -> Rect {
        let w = effective_stroke(self.stroke_width);
        let mut points = vec![self.start, self.end];
        if let Some((left, right)) = arrow::head_points(self.start, self.end, self.stroke_width) {
            points.extend([left, right]);
        }

        let min_x = points.iter().map(|p| p.x).min().unwrap_or(self.end.x);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(self.end.y);
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(self.end.x);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(self.end.y);
        Rect::from_coords(min_x, min_y, max_x, max_y).inset(-w)
    }
}

/// Rectangle annotation, outlined or filled
#[derive(Clone, Debug, PartialEq)]
pub struct RectAnnotation {
    /// Rectangle in pixel coordinates, normalized on construction
    pub rect: Rect,
    pub color: ShapeColor,
    pub stroke_width: i32,
    pub filled: bool,
}

impl RectAnnotation {
    pub fn new(rect: Rect, color: ShapeColor, stroke_width: i32, filled: bool) -> Self {
        Self {
            rect: rect.normalized(),
            color,
            stroke_width,
            filled,
        }
    }

    /// The rectangle grown by the stroke width on every side
    pub fn bounds(&self) -> Rect {
        self.rect.inset(-effective_stroke(self.stroke_width))
    }
}

/// Unified annotation type for ordered drawing
#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Arrow(ArrowAnnotation),
    Rect(RectAnnotation),
}

impl Annotation {
    pub fn arrow(start: Point, end: Point, color: ShapeColor, stroke_width: i32) -> Self {
        Annotation::Arrow(ArrowAnnotation::new(start, end, color, stroke_width))
    }

    pub fn rect(rect: Rect, color: ShapeColor, stroke_width: i32, filled: bool) -> Self {
        Annotation::Rect(RectAnnotation::new(rect, color, stroke_width, filled))
    }

    pub fn color(&self) -> ShapeColor {
        match self {
            Annotation::Arrow(a) => a.color,
            Annotation::Rect(r) => r.color,
        }
    }

    pub fn stroke_width(&self) -> i32 {
        match self {
            Annotation::Arrow(a) => a.stroke_width,
            Annotation::Rect(r) => r.stroke_width,
        }
    }

    /// Axis-aligned bounds, grown by the stroke width on all sides
    pub fn bounds(&self) -> Rect {
        match self {
            Annotation::Arrow(a) => a.bounds(),
            Annotation::Rect(r) => r.bounds(),
        }
    }

    /// Coarse hit test against [`Annotation::bounds`]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Rasterize onto `img`, clipping to its extents
    pub fn draw(&self, img: &mut RgbaImage) {
        draw::draw_annotation(img, self);
    }
}
