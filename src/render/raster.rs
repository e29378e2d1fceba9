//! Pixel-level drawing primitives
//!
//! Everything here works on integer pixel coordinates and clips silently to
//! the image, so callers never need to bounds-check.

use image::{Rgba, RgbaImage};

use super::geometry::{arrow, effective_stroke};
use crate::domain::{Point, Rect};

/// Fill a `width` x `width` square centred on `center`
///
/// The block spans `-width/2..=width/2` on each axis (integer division), so
/// even widths come out one pixel wider, matching the line traversal.
pub fn draw_block(img: &mut RgbaImage, center: Point, width: i32, color: Rgba<u8>) {
    let half = effective_stroke(width) / 2;
    let (w, h) = (img.width() as i64, img.height() as i64);

    let min_x = (i64::from(center.x) - i64::from(half)).max(0);
    let max_x = (i64::from(center.x) + i64::from(half)).min(w - 1);
    let min_y = (i64::from(center.y) - i64::from(half)).max(0);
    let max_y = (i64::from(center.y) + i64::from(half)).min(h - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Draw a thick line by stepping along its major axis
///
/// Step `i` of `n` sits at `start + round(i * delta / n)`, the pixels
/// Bresenham's algorithm visits. A square block is stamped at every step,
/// giving constant thickness along the whole path with blocky corners. Only
/// steps whose block can reach the image are visited, so segments far off
/// the buffer cost nothing.
pub fn draw_thick_line(img: &mut RgbaImage, start: Point, end: Point, color: Rgba<u8>, width: i32) {
    let segment = Segment::new(start, end);
    if segment.steps == 0 {
        draw_block(img, start, width, color);
        return;
    }

    let half = i64::from(effective_stroke(width) / 2);
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let (x_first, x_end) = segment.visible_steps(-half, w - 1 + half, |p| p.0);
    let (y_first, y_end) = segment.visible_steps(-half, h - 1 + half, |p| p.1);

    for i in x_first.max(y_first)..x_end.min(y_end) {
        draw_block(img, segment.point(i), width, color);
    }
}

/// A line segment walked in `steps` unit steps along its major axis
struct Segment {
    start: Point,
    dx: i64,
    dy: i64,
    steps: i64,
}

impl Segment {
    fn new(start: Point, end: Point) -> Self {
        let dx = i64::from(end.x) - i64::from(start.x);
        let dy = i64::from(end.y) - i64::from(start.y);
        Self {
            start,
            dx,
            dy,
            steps: dx.abs().max(dy.abs()),
        }
    }

    /// Coordinates of step `i`; requires `steps > 0`
    fn coords(&self, i: i64) -> (i64, i64) {
        (
            i64::from(self.start.x) + div_round(i, self.dx, self.steps),
            i64::from(self.start.y) + div_round(i, self.dy, self.steps),
        )
    }

    fn point(&self, i: i64) -> Point {
        let (x, y) = self.coords(i);
        // Every step lies between the two i32 endpoints
        Point::new(x as i32, y as i32)
    }

    /// Half-open range of steps whose coordinate lies in `[lo, hi]`
    ///
    /// Each coordinate is monotonic in the step index, so both ends are found
    /// by binary search.
    fn visible_steps(&self, lo: i64, hi: i64, axis: impl Fn((i64, i64)) -> i64) -> (i64, i64) {
        let at = |i| axis(self.coords(i));
        if at(self.steps) >= at(0) {
            (
                self.first_step(|i| at(i) >= lo),
                self.first_step(|i| at(i) > hi),
            )
        } else {
            (
                self.first_step(|i| at(i) <= hi),
                self.first_step(|i| at(i) < lo),
            )
        }
    }

    /// Smallest step in `0..=steps` for which `pred` holds, or `steps + 1`
    fn first_step(&self, pred: impl Fn(i64) -> bool) -> i64 {
        let (mut lo, mut hi) = (0, self.steps + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

/// `i * delta / steps` rounded half away from zero
fn div_round(i: i64, delta: i64, steps: i64) -> i64 {
    let num = i128::from(i) * i128::from(delta);
    let den = i128::from(steps);
    let q = (2 * num.abs() + den) / (2 * den);
    // |q| <= |delta|, which fits i64
    (if num < 0 { -q } else { q }) as i64
}

/// Draw an arrow: the shaft, then two head lines from the tip to the wings
///
/// Zero-length arrows have no direction, so only the tip block is drawn.
pub fn draw_arrow(img: &mut RgbaImage, start: Point, end: Point, color: Rgba<u8>, width: i32) {
    draw_thick_line(img, start, end, color, width);
    if let Some((left, right)) = arrow::head_points(start, end, width) {
        draw_thick_line(img, end, left, color, width);
        draw_thick_line(img, end, right, color, width);
    }
}

/// Draw the four sides of a rectangle as thick lines
pub fn draw_rect_outline(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>, width: i32) {
    let r = rect.normalized();
    let (min, max) = (r.min, r.max);
    // top, bottom, left, right
    draw_thick_line(img, min, Point::new(max.x, min.y), color, width);
    draw_thick_line(img, Point::new(min.x, max.y), max, color, width);
    draw_thick_line(img, min, Point::new(min.x, max.y), color, width);
    draw_thick_line(img, Point::new(max.x, min.y), max, color, width);
}

/// Fill `[min, max)` with `color` using straight-alpha "over" compositing
pub fn fill_rect_over(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let Some(clipped) = rect.intersect(image_rect(img)) else {
        return;
    };

    for y in clipped.min.y..clipped.max.y {
        for x in clipped.min.x..clipped.max.x {
            let dst = img.get_pixel_mut(x as u32, y as u32);
            *dst = blend_over(*dst, color);
        }
    }
}

/// Porter-Duff "over" on straight-alpha pixels, rounded to nearest
///
/// An opaque destination stays opaque whatever the source alpha.
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    let da = u32::from(dst[3]);
    // Output alpha scaled by 255
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| {
        let num = u32::from(s) * sa * 255 + u32::from(d) * da * (255 - sa);
        ((num + out_a / 2) / out_a) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        ((out_a + 127) / 255) as u8,
    ])
}

/// The full extent of an image as a rectangle
pub fn image_rect(img: &RgbaImage) -> Rect {
    Rect::from_coords(
        0,
        0,
        i32::try_from(img.width()).unwrap_or(i32::MAX),
        i32::try_from(img.height()).unwrap_or(i32::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::new(w, h)
    }

    fn colored_pixels(img: &RgbaImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [0, 0, 0, 0])
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_block_sizes() {
        for (width, expected) in [(1, 1), (3, 9), (5, 25), (2, 9)] {
            let mut img = blank(20, 20);
            draw_block(&mut img, Point::new(10, 10), width, RED);
            assert_eq!(colored_pixels(&img).len(), expected, "width {width}");
        }
    }

    #[test]
    fn test_zero_and_negative_width_draw_single_pixel() {
        for width in [0, -4] {
            let mut img = blank(10, 10);
            draw_thick_line(&mut img, Point::new(2, 2), Point::new(2, 2), RED, width);
            assert_eq!(colored_pixels(&img), vec![(2, 2)]);
        }
    }

    #[test]
    fn test_block_clips_at_edges() {
        let mut img = blank(4, 4);
        draw_block(&mut img, Point::new(0, 0), 5, RED);
        assert_eq!(colored_pixels(&img).len(), 9);

        let mut img = blank(4, 4);
        draw_block(&mut img, Point::new(-100, 500), 5, RED);
        assert!(colored_pixels(&img).is_empty());
    }

    #[test]
    fn test_line_hits_both_endpoints() {
        let mut img = blank(50, 50);
        draw_thick_line(&mut img, Point::new(3, 40), Point::new(45, 7), RED, 1);
        assert_eq!(*img.get_pixel(3, 40), RED);
        assert_eq!(*img.get_pixel(45, 7), RED);
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let mut img = blank(30, 30);
        draw_thick_line(&mut img, Point::new(5, 10), Point::new(20, 10), RED, 3);
        for x in 4..=21 {
            for y in 9..=11 {
                assert_eq!(*img.get_pixel(x, y), RED, "({x}, {y})");
            }
        }
        assert_eq!(colored_pixels(&img).len(), 18 * 3);
    }

    #[test]
    fn test_line_out_of_bounds_does_not_panic() {
        let mut img = blank(10, 10);
        draw_thick_line(&mut img, Point::new(-20, -20), Point::new(30, 30), RED, 3);
        assert_eq!(*img.get_pixel(5, 5), RED);
    }

    #[test]
    fn test_degenerate_arrow_is_single_block() {
        let mut img = blank(20, 20);
        draw_arrow(&mut img, Point::new(10, 10), Point::new(10, 10), RED, 3);
        let pixels = colored_pixels(&img);
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|&(x, y)| (9..=11).contains(&x) && (9..=11).contains(&y)));
    }

    #[test]
    fn test_arrow_draws_head() {
        let mut img = blank(120, 100);
        draw_arrow(&mut img, Point::new(0, 50), Point::new(100, 50), RED, 3);
        // Wing tips at (85, 59) and (85, 41)
        assert_eq!(*img.get_pixel(85, 59), RED);
        assert_eq!(*img.get_pixel(85, 41), RED);
        assert_eq!(img.get_pixel(40, 60).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_rect_outline_leaves_center() {
        let mut img = blank(200, 200);
        draw_rect_outline(&mut img, Rect::from_coords(50, 50, 150, 150), RED, 3);
        assert_eq!(*img.get_pixel(50, 100), RED);
        assert_eq!(*img.get_pixel(150, 100), RED);
        assert_eq!(*img.get_pixel(100, 50), RED);
        assert_eq!(*img.get_pixel(100, 150), RED);
        assert_eq!(img.get_pixel(100, 100).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_is_half_open() {
        let mut img = blank(20, 20);
        fill_rect_over(&mut img, Rect::from_coords(5, 5, 10, 8), RED);
        assert_eq!(colored_pixels(&img).len(), 15);
        assert_eq!(*img.get_pixel(9, 7), RED);
        assert_eq!(img.get_pixel(10, 7).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_blends_translucent_color() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        fill_rect_over(&mut img, Rect::from_coords(0, 0, 4, 4), Rgba([0, 0, 0, 128]));
        let p = img.get_pixel(1, 1);
        assert_eq!(p[3], 255);
        assert!(p[0] > 100 && p[0] < 150, "got {p:?}");
    }

    #[test]
    fn test_translucent_fill_keeps_opaque_base_opaque() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([240, 240, 240, 255]));
        fill_rect_over(&mut img, Rect::from_coords(0, 0, 3, 3), Rgba([0, 0, 255, 128]));
        for p in img.pixels() {
            assert_eq!(p.0, [120, 120, 248, 255]);
        }
    }

    #[test]
    fn test_blend_over_edge_cases() {
        let clear = Rgba([0, 0, 0, 0]);
        let half_red = Rgba([255, 0, 0, 128]);
        assert_eq!(blend_over(clear, half_red), half_red);
        assert_eq!(blend_over(half_red, clear), half_red);
        assert_eq!(blend_over(clear, clear), clear);
        assert_eq!(blend_over(Rgba([9, 9, 9, 255]), RED), RED);
    }

    #[test]
    fn test_line_far_off_image_draws_nothing() {
        let mut img = blank(10, 10);
        draw_thick_line(&mut img, Point::new(-50, 500), Point::new(5_000_000, 400), RED, 5);
        assert!(colored_pixels(&img).is_empty());
    }

    #[test]
    fn test_extreme_line_only_visits_visible_steps() {
        let mut img = blank(10, 10);
        let (min, max) = (Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
        draw_thick_line(&mut img, min, max, RED, 1);
        let pixels = colored_pixels(&img);
        assert_eq!(pixels.len(), 10);
        assert!(pixels.iter().all(|&(x, y)| x == y));

        // Reversed direction covers the same pixels
        let mut reversed = blank(10, 10);
        draw_thick_line(&mut reversed, max, min, RED, 1);
        assert_eq!(colored_pixels(&reversed), pixels);
    }

    #[test]
    fn test_shallow_line_rounds_minor_axis() {
        let mut img = blank(12, 4);
        draw_thick_line(&mut img, Point::new(0, 0), Point::new(10, 2), RED, 1);
        let rows = [0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2];
        for (x, y) in rows.into_iter().enumerate() {
            assert_eq!(*img.get_pixel(x as u32, y), RED, "column {x}");
        }
        assert_eq!(colored_pixels(&img).len(), rows.len());
    }

    #[test]
    fn test_fill_clips() {
        let mut img = blank(10, 10);
        fill_rect_over(&mut img, Rect::from_coords(-5, -5, 3, 100), RED);
        assert_eq!(colored_pixels(&img).len(), 30);
    }
}
