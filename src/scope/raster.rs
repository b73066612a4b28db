use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;

use super::error::ScopeError;
use super::surface::{DrawSurface, PointF, RectF, StrokeStyle};
use super::view::ScopeView;

const BACKGROUND: RGBColor = RGBColor(10, 10, 10);

/// Rasterize the scope's current state offscreen and return PNG bytes.
///
/// Headless counterpart of the on-screen backend: hosts without a UI loop
/// (and the test suite) get the exact same axis-and-polyline output.
pub fn render_scope_png(view: &ScopeView, width: u32, height: u32) -> Result<Vec<u8>, ScopeError> {
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&BACKGROUND)?;
        let mut surface = BitmapSurface { area: &root };
        view.render(&mut surface, width as f32, height as f32)?;
        root.present()?;
    }
    encode_png(&buffer, width, height)
}

/// `DrawSurface` over a plotters bitmap drawing area, in pixel coordinates.
struct BitmapSurface<'a, 'b> {
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
}

impl DrawSurface for BitmapSurface<'_, '_> {
    fn stroke_rect(&mut self, rect: RectF, stroke: StrokeStyle) -> Result<(), ScopeError> {
        self.area.draw(&Rectangle::new(
            [
                (rect.x as i32, rect.y as i32),
                ((rect.x + rect.width) as i32, (rect.y + rect.height) as i32),
            ],
            shape_style(stroke),
        ))?;
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[PointF],
        stroke: StrokeStyle,
    ) -> Result<(), ScopeError> {
        let path: Vec<(i32, i32)> = points.iter().map(|p| (p.x as i32, p.y as i32)).collect();
        self.area.draw(&PathElement::new(path, shape_style(stroke)))?;
        Ok(())
    }
}

fn shape_style(stroke: StrokeStyle) -> ShapeStyle {
    ShapeStyle {
        color: RGBColor(stroke.color.r, stroke.color.g, stroke.color.b)
            .mix(stroke.color.a as f64 / 255.0),
        filled: false,
        stroke_width: stroke.width_px.round().max(1.0) as u32,
    }
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ScopeError> {
    let img = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ScopeError::Encode("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
