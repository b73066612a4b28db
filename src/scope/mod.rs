pub mod buffer;
pub mod error;
pub mod range;
pub mod raster;
pub mod repaint;
pub mod style;
pub mod surface;
pub mod view;

pub use buffer::SampleBuffer;
pub use error::ScopeError;
pub use range::ValueRange;
pub use raster::render_scope_png;
pub use repaint::RepaintSignal;
pub use style::{Rgba, ScopeConfig, ScopeStyle};
pub use surface::{DrawOp, DrawSurface, PointF, RecordingSurface, RectF, StrokeStyle};
pub use view::ScopeView;
