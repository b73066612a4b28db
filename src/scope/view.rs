use super::buffer::SampleBuffer;
use super::error::ScopeError;
use super::range::ValueRange;
use super::repaint::RepaintSignal;
use super::style::{Rgba, ScopeConfig, ScopeStyle};
use super::surface::{DrawSurface, PointF, RectF, StrokeStyle};

/// Live scrolling plot of integer sensor readings.
///
/// Owns a fixed-capacity FIFO of samples and the vertical range derived from
/// them; both are mutated only through [`add_value`](Self::add_value) and
/// [`clear`](Self::clear). Mutations never block: they mark the repaint
/// signal and return, and the host calls [`render`](Self::render) at its next
/// paint opportunity. All mutations and `render` are expected on the same
/// host thread; wrap the view in a mutex if the host paints concurrently.
pub struct ScopeView {
    config: ScopeConfig,
    buffer: SampleBuffer,
    range: ValueRange,
    repaint: RepaintSignal,
}

impl ScopeView {
    pub fn new(config: ScopeConfig) -> Self {
        let buffer = SampleBuffer::new(config.capacity);
        Self {
            config,
            buffer,
            range: ValueRange::unset(),
            repaint: RepaintSignal::new(),
        }
    }

    /// Append a reading, evicting the oldest once the buffer is full, then
    /// rebuild the vertical range over the whole buffer and request a redraw.
    pub fn add_value(&mut self, value: i32) {
        self.buffer.push(value);
        self.range = ValueRange::rescan(self.buffer.iter());
        self.range.apply_floor(self.config.min_span);
        self.repaint.mark();
    }

    /// Drop every sample and reset the range to unset.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.range = ValueRange::unset();
        self.repaint.mark();
    }

    pub fn set_axis_color(&mut self, color: Rgba) {
        self.config.style.axis_color = color;
        self.repaint.mark();
    }

    pub fn set_plot_color(&mut self, color: Rgba) {
        self.config.style.plot_color = color;
        self.repaint.mark();
    }

    pub fn samples(&self) -> impl Iterator<Item = &i32> {
        self.buffer.iter()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    pub fn style(&self) -> &ScopeStyle {
        &self.config.style
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn repaint(&self) -> &RepaintSignal {
        &self.repaint
    }

    /// Rasterize the current state into `surface`. Pure read: strokes the
    /// padded axis rectangle, then the sample polyline when there is data.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        width: f32,
        height: f32,
    ) -> Result<(), ScopeError> {
        let style = &self.config.style;
        let pad = style.padding_px;
        let axis = RectF {
            x: pad,
            y: pad,
            width: width - 2.0 * pad,
            height: height - 2.0 * pad,
        };
        surface.stroke_rect(
            axis,
            StrokeStyle {
                width_px: style.axis_stroke_px,
                color: style.axis_color,
            },
        )?;
        if self.buffer.is_empty() {
            // Nothing to scale against; the range is unset here.
            return Ok(());
        }

        let scale = axis.height / self.range.span() as f32;
        // Pitch divides by the configured capacity, not the current length:
        // a partially filled buffer occupies the left portion of the axis and
        // grows rightward without rescaling already-drawn samples.
        let pitch = axis.width / (self.config.capacity - 1) as f32;
        let min = self.range.min;
        let points: Vec<PointF> = self
            .buffer
            .iter()
            .enumerate()
            .map(|(i, &v)| PointF {
                x: pad + i as f32 * pitch,
                y: axis.height + pad - (v - min) as f32 * scale,
            })
            .collect();
        surface.stroke_polyline(
            &points,
            StrokeStyle {
                width_px: style.plot_stroke_px,
                color: style.plot_color,
            },
        )
    }
}

impl Default for ScopeView {
    fn default() -> Self {
        Self::new(ScopeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::surface::{DrawOp, RecordingSurface};

    fn scope(capacity: usize, min_span: i32) -> ScopeView {
        ScopeView::new(ScopeConfig::new(capacity, min_span))
    }

    #[test]
    fn length_tracks_min_of_pushes_and_capacity() {
        let mut view = scope(8, 10);
        for n in 1..=20 {
            view.add_value(n);
            assert_eq!(view.len(), (n as usize).min(8));
        }
    }

    #[test]
    fn eviction_keeps_newest_in_order() {
        let mut view = scope(4, 10);
        for v in [10, 20, 30, 40, 50] {
            view.add_value(v);
        }
        let contents: Vec<i32> = view.samples().copied().collect();
        assert_eq!(contents, vec![20, 30, 40, 50]);
    }

    #[test]
    fn span_never_falls_below_the_floor() {
        let mut view = scope(16, 10);
        for v in [0, 1, 1, 2, 100, 100, 3] {
            view.add_value(v);
            assert!(view.value_range().span() >= 10);
        }
    }

    #[test]
    fn narrow_spans_widen_to_double_deficit() {
        // Natural span 4 with floor 10 must come out as 2 * 10 - 4 = 16.
        let mut view = scope(16, 10);
        view.add_value(50);
        view.add_value(54);
        assert_eq!(view.value_range().span(), 16);
        assert_eq!(view.value_range(), ValueRange { min: 44, max: 60 });
    }

    #[test]
    fn flat_then_spread_scenario() {
        let mut view = scope(4, 10);
        view.add_value(5);
        view.add_value(5);
        // Flat signal: zero natural span, so the full floor lands on each side.
        assert_eq!(view.value_range(), ValueRange { min: -5, max: 15 });

        view.add_value(20);
        // Natural span 15 already clears the floor and is kept untouched.
        assert_eq!(view.value_range(), ValueRange { min: 5, max: 20 });
        let contents: Vec<i32> = view.samples().copied().collect();
        assert_eq!(contents, vec![5, 5, 20]);
    }

    #[test]
    fn clear_resets_to_empty_and_unset() {
        let mut view = scope(4, 10);
        view.add_value(1);
        view.add_value(2);
        view.clear();
        assert!(view.is_empty());
        assert!(!view.value_range().is_set());
    }

    #[test]
    fn empty_render_strokes_only_the_axis_rect() {
        let view = scope(4, 10);
        let mut surface = RecordingSurface::new();
        view.render(&mut surface, 100.0, 60.0).unwrap();
        assert_eq!(surface.ops.len(), 1);
        match &surface.ops[0] {
            DrawOp::Rect { rect, stroke } => {
                assert_eq!(rect.x, 10.0);
                assert_eq!(rect.y, 10.0);
                assert_eq!(rect.width, 80.0);
                assert_eq!(rect.height, 40.0);
                assert_eq!(stroke.width_px, 2.0);
            }
            other => panic!("expected axis rect, got {other:?}"),
        }
    }

    #[test]
    fn render_right_after_clear_does_not_divide_by_zero() {
        let mut view = scope(4, 10);
        view.add_value(7);
        view.clear();
        let mut surface = RecordingSurface::new();
        view.render(&mut surface, 100.0, 60.0).unwrap();
        assert_eq!(surface.polylines().count(), 0);
    }

    #[test]
    fn pitch_is_anchored_to_capacity_not_fill_level() {
        let mut view = ScopeView::default(); // capacity 512, padding 10
        view.add_value(0);
        view.add_value(5);
        view.add_value(10);

        let width = 1034.0;
        let mut surface = RecordingSurface::new();
        view.render(&mut surface, width, 200.0).unwrap();

        let line = surface.polylines().next().expect("one polyline");
        assert_eq!(line.len(), 3);
        let axis_width = width - 20.0;
        let expected_third_x = 10.0 + 2.0 * (axis_width / 511.0);
        assert!((line[2].x - expected_third_x).abs() < 1e-4);
    }

    #[test]
    fn larger_samples_plot_higher() {
        let mut view = scope(4, 10);
        view.add_value(0);
        view.add_value(100);

        let mut surface = RecordingSurface::new();
        view.render(&mut surface, 100.0, 220.0).unwrap();

        let line = surface.polylines().next().expect("one polyline");
        // Screen y grows downward, so the larger sample has the smaller y.
        assert!(line[1].y < line[0].y);
        // min sits on the bottom edge of the axis rect, max on the top edge.
        assert!((line[0].y - 210.0).abs() < 1e-4);
        assert!((line[1].y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn mutations_request_a_single_coalesced_repaint() {
        let mut view = scope(4, 10);
        assert!(!view.repaint().is_dirty());
        view.add_value(1);
        view.add_value(2);
        assert!(view.repaint().take());
        assert!(!view.repaint().take());

        view.set_plot_color(Rgba::rgb(1, 2, 3));
        assert!(view.repaint().is_dirty());
        assert_eq!(view.style().plot_color, Rgba::rgb(1, 2, 3));
    }
}
