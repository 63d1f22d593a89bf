use crate::types::{DeviceNameVariant, UserAgentInfo};

/// Pick the most specific device description available.
///
/// First match wins:
/// 1. a model, whatever else is known;
/// 2. a name together with an operating system;
/// 3. a name alone;
/// 4. nothing usable. An operating system without a name is dropped.
///
/// Empty strings count as absent.
pub fn resolve<'a>(ua: &'a UserAgentInfo<'_>) -> DeviceNameVariant<'a> {
    let variant = match (ua.model(), ua.name(), ua.os()) {
        (Some(model), _, _) => DeviceNameVariant::ModelKnown(model),
        (None, Some(name), Some(platform)) => DeviceNameVariant::NameAndPlatform { name, platform },
        (None, Some(name), None) => DeviceNameVariant::NameOnly(name),
        (None, None, _) => DeviceNameVariant::Unknown,
    };

    tracing::debug!(variant = variant.as_str(), "resolved device name");
    variant
}
