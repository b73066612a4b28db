use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// What kind of peripheral this record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeripheralKind {
    Camera,
    Microphone,
    Imu,
    RingSensor,
    EcgPatch,
    Oximeter,
}

impl PeripheralKind {
    pub fn label(&self) -> &'static str {
        match self {
            PeripheralKind::Camera => "camera",
            PeripheralKind::Microphone => "microphone",
            PeripheralKind::Imu => "imu",
            PeripheralKind::RingSensor => "ring sensor",
            PeripheralKind::EcgPatch => "ecg patch",
            PeripheralKind::Oximeter => "oximeter",
        }
    }
}

/// Opaque handle to a sub-device owned by the vendor SDK.
///
/// The host environment implements this over whatever the SDK hands out;
/// nothing in this crate reproduces or inspects the vendor types beyond the
/// identifiers exposed here.
pub trait VendorSubDevice: fmt::Debug + Send + Sync {
    /// Stable identifier within the vendor's namespace.
    fn id(&self) -> &str;
    /// Human-readable name for UI lists.
    fn label(&self) -> &str;
}

pub type SubDeviceHandle = Arc<dyn VendorSubDevice>;

/// Plain record of a connected peripheral. The host owns every field; there
/// are no invariants to protect beyond what it writes in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeripheralInfo {
    pub name: String,
    pub kind: PeripheralKind,
    pub serial: Option<String>,
    pub firmware: Option<String>,
    pub battery_percent: Option<u8>,
    pub connected: bool,
    /// Vendor-owned handles; opaque to this crate and never serialized.
    #[serde(skip)]
    pub sub_devices: Vec<SubDeviceHandle>,
}

impl PeripheralInfo {
    pub fn new(name: impl Into<String>, kind: PeripheralKind) -> Self {
        Self {
            name: name.into(),
            kind,
            serial: None,
            firmware: None,
            battery_percent: None,
            connected: false,
            sub_devices: Vec::new(),
        }
    }

    pub fn sub_device_labels(&self) -> Vec<&str> {
        self.sub_devices.iter().map(|d| d.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubSubDevice {
        id: String,
        label: String,
    }

    impl VendorSubDevice for StubSubDevice {
        fn id(&self) -> &str {
            &self.id
        }

        fn label(&self) -> &str {
            &self.label
        }
    }

    fn stub(id: &str, label: &str) -> SubDeviceHandle {
        Arc::new(StubSubDevice {
            id: id.into(),
            label: label.into(),
        })
    }

    #[test]
    fn lists_sub_device_labels_in_order() {
        let mut info = PeripheralInfo::new("chest patch", PeripheralKind::EcgPatch);
        info.sub_devices.push(stub("lead-1", "Lead I"));
        info.sub_devices.push(stub("lead-2", "Lead II"));
        assert_eq!(info.sub_device_labels(), vec!["Lead I", "Lead II"]);
        assert_eq!(info.sub_devices[0].id(), "lead-1");
    }

    #[test]
    fn serialization_skips_the_opaque_handles() {
        let mut info = PeripheralInfo::new("ring", PeripheralKind::RingSensor);
        info.connected = true;
        info.sub_devices.push(stub("ppg", "PPG sensor"));

        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("ppg"));

        let back: PeripheralInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "ring");
        assert_eq!(back.kind, PeripheralKind::RingSensor);
        assert!(back.connected);
        assert!(back.sub_devices.is_empty());
    }
}
