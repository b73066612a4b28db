use eframe::egui::{self, Color32, Pos2, Rounding, Sense, Shape, Stroke, Vec2};

use crate::scope::{DrawSurface, PointF, RectF, Rgba, ScopeError, ScopeView, StrokeStyle};

/// Paint a [`ScopeView`] into the UI at the given size.
pub fn scope_ui(ui: &mut egui::Ui, view: &ScopeView, size: Vec2) -> egui::Response {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let mut surface = PainterSurface {
        painter: &painter,
        origin: response.rect.min,
    };
    // The egui painter cannot fail, so the draw result carries nothing here.
    let _ = view.render(&mut surface, size.x, size.y);
    // This paint satisfies whatever redraw request was outstanding.
    view.repaint().take();
    response
}

/// Wire the scope's redraw requests to the egui event loop. Call once at
/// creation; afterwards every `add_value`/`clear` wakes the next frame.
pub fn connect_repaint(ctx: &egui::Context, view: &ScopeView) {
    let ctx = ctx.clone();
    view.repaint().connect(move || ctx.request_repaint());
}

struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl DrawSurface for PainterSurface<'_> {
    fn stroke_rect(&mut self, rect: RectF, stroke: StrokeStyle) -> Result<(), ScopeError> {
        let min = self.origin + Vec2::new(rect.x, rect.y);
        let target = egui::Rect::from_min_size(min, Vec2::new(rect.width, rect.height));
        self.painter
            .rect_stroke(target, Rounding::same(0.0), egui_stroke(stroke));
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[PointF],
        stroke: StrokeStyle,
    ) -> Result<(), ScopeError> {
        let positions: Vec<Pos2> = points
            .iter()
            .map(|p| self.origin + Vec2::new(p.x, p.y))
            .collect();
        self.painter.add(Shape::line(positions, egui_stroke(stroke)));
        Ok(())
    }
}

fn egui_stroke(stroke: StrokeStyle) -> Stroke {
    Stroke::new(stroke.width_px, color32(stroke.color))
}

pub fn color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn rgba(color: Color32) -> Rgba {
    Rgba {
        r: color.r(),
        g: color.g(),
        b: color.b(),
        a: color.a(),
    }
}
