pub mod device;
pub mod egui_scope;
pub mod scope;

pub use device::{PeripheralInfo, PeripheralKind, SubDeviceHandle, VendorSubDevice};
pub use scope::{
    render_scope_png, RepaintSignal, Rgba, ScopeConfig, ScopeError, ScopeStyle, ScopeView,
};
