//! Pointer-driven annotation editor
//!
//! Converts drags in logical coordinates into arrow or rectangle annotations
//! and keeps the [`Compositor`] preview in sync while the pointer moves.

use image::RgbaImage;

use crate::config::{CoreConfig, ShapeColor, ShapeTool};
use crate::domain::{Annotation, LogicalPoint, Point, Rect};
use crate::render::compositor::Compositor;
use crate::render::geometry::normalize_corners;

/// Pointer input for the editor, in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawEvent {
    PointerDown(LogicalPoint),
    PointerDrag(LogicalPoint),
    PointerUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    start: Point,
    current: Point,
    moved: bool,
}

/// Annotation editor over a cropped capture
#[derive(Clone, Debug)]
pub struct Editor {
    compositor: Compositor,
    tool: ShapeTool,
    color: ShapeColor,
    scale_factor: f32,
    /// Stroke width in logical units
    base_stroke: f32,
    fill_rectangles: bool,
    stroke: Option<Stroke>,
}

impl Editor {
    /// Create an editor over `image` with default settings
    pub fn new(image: RgbaImage, scale_factor: f32) -> Self {
        Self::with_config(image, scale_factor, &CoreConfig::default())
    }

    pub fn with_config(image: RgbaImage, scale_factor: f32, config: &CoreConfig) -> Self {
        Self {
            compositor: Compositor::new(image),
            tool: config.primary_shape_tool,
            color: config.shape_color,
            scale_factor,
            base_stroke: config.stroke_width,
            fill_rectangles: config.fill_rectangles,
            stroke: None,
        }
    }

    pub fn tool(&self) -> ShapeTool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ShapeTool) {
        log::debug!("Shape tool changed to {:?}", tool);
        self.tool = tool;
    }

    /// Switch to the next tool in the cycle
    pub fn cycle_tool(&mut self) {
        self.set_tool(self.tool.next());
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    pub fn set_color(&mut self, color: ShapeColor) {
        self.color = color;
    }

    pub fn set_fill_rectangles(&mut self, filled: bool) {
        self.fill_rectangles = filled;
    }

    /// Stroke width in pixels for new annotations, truncated toward zero
    pub fn stroke_width(&self) -> i32 {
        (self.base_stroke * self.scale_factor) as i32
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// The buffer a host should show right now
    pub fn display(&self) -> &RgbaImage {
        self.compositor.display()
    }

    /// Feed one pointer event
    ///
    /// Returns true when the displayed image changed.
    pub fn handle_event(&mut self, event: DrawEvent) -> bool {
        match event {
            DrawEvent::PointerDown(pos) => {
                let p = pos.to_pixel_truncated(self.scale_factor);
                self.stroke = Some(Stroke {
                    start: p,
                    current: p,
                    moved: false,
                });
                false
            }
            DrawEvent::PointerDrag(pos) => {
                let Some(stroke) = self.stroke.as_mut() else {
                    return false;
                };
                stroke.current = pos.to_pixel_truncated(self.scale_factor);
                let first_move = !stroke.moved;
                stroke.moved = true;
                let stroke = *stroke;
                let annotation = self.build(stroke.start, stroke.current);
                if first_move {
                    self.compositor.begin_preview(annotation);
                } else {
                    self.compositor.update_preview(annotation);
                }
                true
            }
            DrawEvent::PointerUp => {
                let Some(stroke) = self.stroke.take() else {
                    return false;
                };
                if !stroke.moved {
                    // A click without movement leaves nothing behind
                    self.compositor.cancel_preview();
                    return false;
                }
                let annotation = self.build(stroke.start, stroke.current);
                self.compositor.commit(annotation);
                true
            }
        }
    }

    /// Build an annotation for the current tool between two pixel points
    fn build(&self, start: Point, end: Point) -> Annotation {
        let stroke_width = self.stroke_width();
        match self.tool {
            ShapeTool::Arrow => Annotation::arrow(start, end, self.color, stroke_width),
            ShapeTool::Rectangle => {
                let (min, max) = normalize_corners(start, end);
                let rect = Rect::new(min, max);
                Annotation::rect(rect, self.color, stroke_width, self.fill_rectangles)
            }
        }
    }

    /// The flattened image; an unfinished drag is dropped
    pub fn render_final(&mut self) -> &RgbaImage {
        self.stroke = None;
        self.compositor.render_final()
    }

    pub fn into_final(self) -> RgbaImage {
        self.compositor.into_final()
    }
}
