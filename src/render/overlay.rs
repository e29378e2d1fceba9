//! Selection frame rendering using tiny-skia
//!
//! For hosts that show a bitmap instead of native drawables: paints the dim
//! regions, outline and handles of a [`SelectionGeometry`] over a capture.

use image::RgbaImage;
use tiny_skia::{ColorU8, IntSize, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::{SelectionTheme, ShapeColor};
use crate::domain::LogicalRect;
use crate::selection::SelectionGeometry;
use crate::{Error, Result};

/// Load straight-alpha RGBA into a premultiplied pixmap
fn to_pixmap(img: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = (img.width(), img.height());
    let size = IntSize::from_wh(width, height).ok_or(Error::Pixmap { width, height })?;
    let mut pixmap =
        Pixmap::new(size.width(), size.height()).ok_or(Error::Pixmap { width, height })?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

fn from_pixmap(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    img
}

fn paint_for(color: ShapeColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    paint
}

fn to_skia_rect(r: LogicalRect) -> Option<tiny_skia::Rect> {
    let r = r.normalized();
    tiny_skia::Rect::from_ltrb(r.min.x, r.min.y, r.max.x, r.max.y)
}

fn stroke_rect(pixmap: &mut Pixmap, r: LogicalRect, paint: &Paint, width: f32, ts: Transform) {
    let Some(rect) = to_skia_rect(r) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    pixmap.stroke_path(&path, paint, &stroke, ts, None);
}

/// Draw the selection frame over `background`
///
/// `geometry` is in logical units; `scale_factor` maps it onto the pixels of
/// `background`. The background itself is left untouched.
pub fn render_selection_frame(
    background: &RgbaImage,
    geometry: &SelectionGeometry,
    theme: &SelectionTheme,
    scale_factor: f32,
) -> Result<RgbaImage> {
    let mut pixmap = to_pixmap(background)?;
    let ts = Transform::from_scale(scale_factor, scale_factor);

    let dim = paint_for(theme.dim_color);
    for rect in geometry.dims.iter().filter_map(|r| to_skia_rect(*r)) {
        pixmap.fill_rect(rect, &dim, ts, None);
    }

    if let Some(outline) = geometry.outline {
        let paint = paint_for(theme.outline_color);
        stroke_rect(&mut pixmap, outline, &paint, theme.outline_width, ts);
    }

    if let Some(handles) = &geometry.handles {
        let fill = paint_for(theme.handle_fill);
        let border = paint_for(theme.handle_border);
        for handle in handles {
            if let Some(rect) = to_skia_rect(*handle) {
                pixmap.fill_rect(rect, &fill, ts, None);
            }
            stroke_rect(&mut pixmap, *handle, &border, theme.handle_border_width, ts);
        }
    }

    Ok(from_pixmap(&pixmap))
}
