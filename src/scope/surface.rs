use super::error::ScopeError;
use super::style::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width_px: f32,
    pub color: Rgba,
}

/// Seam between the scope and whatever actually puts pixels on screen.
///
/// The scope only ever strokes one rectangle and one polyline per frame, so
/// this is the whole contract a host rasterizer has to satisfy.
pub trait DrawSurface {
    fn stroke_rect(&mut self, rect: RectF, stroke: StrokeStyle) -> Result<(), ScopeError>;
    fn stroke_polyline(&mut self, points: &[PointF], stroke: StrokeStyle)
        -> Result<(), ScopeError>;
}

/// Draw command captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect { rect: RectF, stroke: StrokeStyle },
    Polyline { points: Vec<PointF>, stroke: StrokeStyle },
}

/// In-memory surface useful for tests and deterministic inspection.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[PointF]> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polyline { points, .. } => Some(points.as_slice()),
            DrawOp::Rect { .. } => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_rect(&mut self, rect: RectF, stroke: StrokeStyle) -> Result<(), ScopeError> {
        self.ops.push(DrawOp::Rect { rect, stroke });
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[PointF],
        stroke: StrokeStyle,
    ) -> Result<(), ScopeError> {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }
}
