use serde::{Deserialize, Serialize};

/// 8-bit RGBA color value. No validation beyond the type: whatever the host
/// hands over is drawn as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Presentation-only settings for the scope: colors, strokes, padding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScopeStyle {
    pub axis_color: Rgba,
    pub plot_color: Rgba,
    pub axis_stroke_px: f32,
    pub plot_stroke_px: f32,
    pub padding_px: f32,
}

impl Default for ScopeStyle {
    fn default() -> Self {
        Self {
            // Pale green frame, pure green trace.
            axis_color: Rgba::rgb(0xAB, 0xD0, 0xB1),
            plot_color: Rgba::rgb(0x00, 0xFF, 0x00),
            axis_stroke_px: 2.0,
            plot_stroke_px: 3.0,
            padding_px: 10.0,
        }
    }
}

/// Construction-time configuration for a [`super::ScopeView`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub capacity: usize,
    pub min_span: i32,
    pub style: ScopeStyle,
}

impl ScopeConfig {
    pub fn new(capacity: usize, min_span: i32) -> Self {
        Self {
            // The horizontal pitch divides by capacity - 1, so anything
            // below two samples is meaningless.
            capacity: capacity.max(2),
            min_span: min_span.max(1),
            style: ScopeStyle::default(),
        }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::new(512, 10)
    }
}
