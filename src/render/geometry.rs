//! Shared geometry calculations for annotations
//!
//! Pure vector math used both for drawing and for computing bounds.

use crate::domain::Point;

/// Widest stroke that is drawn; wider requests are clamped to it
pub const MAX_STROKE_WIDTH: i32 = 1024;

/// Clamp a stroke width into `1..=MAX_STROKE_WIDTH`
#[inline]
pub fn effective_stroke(stroke_width: i32) -> i32 {
    stroke_width.clamp(1, MAX_STROKE_WIDTH)
}

/// Arrow geometry
pub mod arrow {
    use super::effective_stroke;
    use crate::domain::Point;

    /// Head length as a multiple of the stroke width
    pub const HEAD_LENGTH_FACTOR: i32 = 5;
    /// Half of the head's base width as a multiple of the stroke width
    pub const HEAD_HALF_WIDTH_FACTOR: i32 = 3;
    /// Arrows shorter than this have no usable direction
    pub const MIN_LENGTH: f64 = 1.0;

    /// Calculate the two wing points of the arrowhead at `end`
    ///
    /// Steps back from `end` along the shaft by the head length, then offsets
    /// perpendicular by the half width. Coordinates are truncated toward zero.
    /// Returns None for arrows without a direction.
    pub fn head_points(start: Point, end: Point, stroke_width: i32) -> Option<(Point, Point)> {
        let stroke = effective_stroke(stroke_width);
        let head_length = f64::from(stroke * HEAD_LENGTH_FACTOR);
        let head_width = f64::from(stroke * HEAD_HALF_WIDTH_FACTOR);

        let dx = f64::from(end.x) - f64::from(start.x);
        let dy = f64::from(end.y) - f64::from(start.y);
        let length = (dx * dx + dy * dy).sqrt();
        if length < MIN_LENGTH {
            return None;
        }

        // Unit direction vector (pointing from start to end)
        let nx = dx / length;
        let ny = dy / length;

        let base_x = f64::from(end.x) - nx * head_length;
        let base_y = f64::from(end.y) - ny * head_length;

        let (perp_x, perp_y) = (-ny, nx);

        let left = Point::new(
            (base_x + perp_x * head_width) as i32,
            (base_y + perp_y * head_width) as i32,
        );
        let right = Point::new(
            (base_x - perp_x * head_width) as i32,
            (base_y - perp_y * head_width) as i32,
        );
        Some((left, right))
    }
}

/// Normalize min/max coordinates from arbitrary start/end points
#[inline]
pub fn normalize_corners(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
