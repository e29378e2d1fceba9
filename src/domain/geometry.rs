//! Geometric types for selection regions and annotation coordinates
//!
//! Two coordinate spaces exist: logical units, in which all pointer input
//! arrives, and pixels of the captured bitmap. `pixel = logical * scale_factor`.

/// Position in the pixel grid of a bitmap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Position in logical (display independent) units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalPoint {
    pub x: f32,
    pub y: f32,
}

impl LogicalPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offset
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Offset from `origin` to `self`
    pub fn delta_from(self, origin: LogicalPoint) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Convert to pixels, rounding each component to the nearest pixel
    pub fn to_pixel_rounded(self, scale_factor: f32) -> Point {
        Point::new(
            (self.x * scale_factor).round() as i32,
            (self.y * scale_factor).round() as i32,
        )
    }

    /// Convert to pixels, truncating each component toward zero
    pub fn to_pixel_truncated(self, scale_factor: f32) -> Point {
        Point::new(
            (self.x * scale_factor) as i32,
            (self.y * scale_factor) as i32,
        )
    }
}

/// Axis-aligned rectangle in pixel coordinates
///
/// Corners are not guaranteed to be ordered while a drag is in progress;
/// call [`Rect::normalized`] before querying geometry. The max corner is
/// exclusive for containment, as in a half-open pixel range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from two corner coordinates
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Reorder corners so that `min <= max` on both axes
    pub fn normalized(self) -> Self {
        Self::from_coords(
            self.min.x.min(self.max.x),
            self.min.y.min(self.max.y),
            self.min.x.max(self.max.x),
            self.min.y.max(self.max.y),
        )
    }

    pub fn is_normalized(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Get the width of the normalized rectangle, saturating at `i32::MAX`
    pub fn width(&self) -> i32 {
        i32::try_from(self.max.x.abs_diff(self.min.x)).unwrap_or(i32::MAX)
    }

    /// Get the height of the normalized rectangle, saturating at `i32::MAX`
    pub fn height(&self) -> i32 {
        i32::try_from(self.max.y.abs_diff(self.min.y)).unwrap_or(i32::MAX)
    }

    /// True if the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Move every edge inwards by `n` pixels (outwards for negative `n`)
    ///
    /// Edges saturate at the `i32` range.
    pub fn inset(self, n: i32) -> Self {
        let r = self.normalized();
        Self::from_coords(
            r.min.x.saturating_add(n),
            r.min.y.saturating_add(n),
            r.max.x.saturating_sub(n),
            r.max.y.saturating_sub(n),
        )
    }

    /// Check if this rectangle contains a point (max edges exclusive)
    pub fn contains(&self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.min.x && p.x < r.max.x && p.y >= r.min.y && p.y < r.max.y
    }

    /// Calculate the intersection of two rectangles
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();
        let min_x = a.min.x.max(b.min.x);
        let min_y = a.min.y.max(b.min.y);
        let max_x = a.max.x.min(b.max.x);
        let max_y = a.max.y.min(b.max.y);
        if min_x < max_x && min_y < max_y {
            Some(Rect::from_coords(min_x, min_y, max_x, max_y))
        } else {
            None
        }
    }
}

/// Logical size of the surface a selection is made on
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical size of a bitmap of `width` x `height` pixels
    pub fn from_pixels(width: u32, height: u32, scale_factor: f32) -> Self {
        Self::new(width as f32 / scale_factor, height as f32 / scale_factor)
    }
}

/// Axis-aligned rectangle in logical units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogicalRect {
    pub min: LogicalPoint,
    pub max: LogicalPoint,
}

impl LogicalRect {
    pub const fn new(min: LogicalPoint, max: LogicalPoint) -> Self {
        Self { min, max }
    }

    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            LogicalPoint::new(x, y),
            LogicalPoint::new(x + width, y + height),
        )
    }

    pub fn normalized(self) -> Self {
        Self::new(
            LogicalPoint::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            LogicalPoint::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        )
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).abs()
    }

    pub fn center(&self) -> LogicalPoint {
        LogicalPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if a point lies inside or on the edge of the rectangle
    pub fn contains(&self, p: LogicalPoint) -> bool {
        let r = self.normalized();
        p.x >= r.min.x && p.x <= r.max.x && p.y >= r.min.y && p.y <= r.max.y
    }

    /// Convert to pixel coordinates with `round(logical * scale_factor)`
    pub fn to_pixel_rect(self, scale_factor: f32) -> Rect {
        let r = self.normalized();
        Rect::new(
            r.min.to_pixel_rounded(scale_factor),
            r.max.to_pixel_rounded(scale_factor),
        )
    }
}
