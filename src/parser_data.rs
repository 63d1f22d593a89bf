use super::db;
use super::types::DeviceType;

// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

/// An operating system or a client (browser / app).
pub(crate) struct ProductData {
    pub name: String,
    pub version_template: Option<String>,
}

pub(crate) struct DeviceData {
    pub model_template: Option<String>,
    pub device_type: Option<DeviceType>,
}

impl From<db::ProductEntry> for (String, ProductData) {
    fn from(entry: db::ProductEntry) -> Self {
        (
            entry.regex,
            ProductData {
                name: entry.name,
                version_template: entry.version,
            },
        )
    }
}

impl From<db::DeviceEntry> for (String, DeviceData) {
    fn from(entry: db::DeviceEntry) -> Self {
        let device_type = entry.device.as_deref().and_then(DeviceType::from_str);
        (
            entry.regex,
            DeviceData {
                model_template: entry.model,
                device_type,
            },
        )
    }
}
