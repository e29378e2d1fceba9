//! Settings for selection and annotation
//!
//! These types are serde-serializable so a host can persist them with
//! whatever backend it uses. Nothing here reads or writes files.

use serde::{Deserialize, Serialize};

/// Serializable RGBA color (0-255 per channel, straight alpha)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Default for ShapeColor {
    fn default() -> Self {
        // Opaque red
        Self::rgba(255, 0, 0, 255)
    }
}

impl ShapeColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Convert to image crate RGBA format
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for ShapeColor {
    fn from(c: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = c.0;
        Self { r, g, b, a }
    }
}

/// Shape annotation tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeTool {
    #[default]
    Arrow,
    Rectangle,
}

impl ShapeTool {
    /// Get the next shape tool in the cycle
    pub fn next(self) -> Self {
        match self {
            ShapeTool::Arrow => ShapeTool::Rectangle,
            ShapeTool::Rectangle => ShapeTool::Arrow,
        }
    }
}

/// Colors and sizes used to draw selection feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionTheme {
    /// Fill for the regions outside the selection
    pub dim_color: ShapeColor,
    pub outline_color: ShapeColor,
    /// Outline stroke width in logical units
    pub outline_width: f32,
    pub handle_fill: ShapeColor,
    pub handle_border: ShapeColor,
    pub handle_border_width: f32,
}

impl Default for SelectionTheme {
    fn default() -> Self {
        Self {
            dim_color: ShapeColor::rgba(0, 0, 0, 120),
            outline_color: ShapeColor::rgb(0, 120, 215),
            outline_width: 2.0,
            handle_fill: ShapeColor::rgb(255, 255, 255),
            handle_border: ShapeColor::rgb(0, 120, 215),
            handle_border_width: 1.0,
        }
    }
}

/// Default handle size in logical units; also the hit radius
pub const DEFAULT_HANDLE_SIZE: f32 = 8.0;

/// Default annotation stroke width in logical units
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Settings shared by the selector and the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Color for new shape annotations
    #[serde(default)]
    pub shape_color: ShapeColor,
    /// Tool active when the editor opens
    #[serde(default)]
    pub primary_shape_tool: ShapeTool,
    /// Stroke width in logical units, scaled by the display factor when drawing
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    /// Whether the rectangle tool fills instead of outlining
    #[serde(default)]
    pub fill_rectangles: bool,
    /// Selection handle size in logical units
    #[serde(default = "default_handle_size")]
    pub handle_size: f32,
    #[serde(default)]
    pub selection_theme: SelectionTheme,
}

fn default_stroke_width() -> f32 {
    DEFAULT_STROKE_WIDTH
}

fn default_handle_size() -> f32 {
    DEFAULT_HANDLE_SIZE
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            shape_color: ShapeColor::default(),
            primary_shape_tool: ShapeTool::Arrow,
            stroke_width: default_stroke_width(),
            fill_rectangles: false,
            handle_size: default_handle_size(),
            selection_theme: SelectionTheme::default(),
        }
    }
}
