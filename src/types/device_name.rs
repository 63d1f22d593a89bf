/// The most specific description available for the device a session came
/// from, in decreasing order of specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceNameVariant<'a> {
    /// A device model is known; it is shown verbatim.
    ModelKnown(&'a str),
    /// A browser/app name and the platform it runs on.
    NameAndPlatform { name: &'a str, platform: &'a str },
    /// Only the browser/app name is known; it is shown verbatim.
    NameOnly(&'a str),
    Unknown,
}

impl DeviceNameVariant<'_> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelKnown(_) => "model_known",
            Self::NameAndPlatform { .. } => "name_and_platform",
            Self::NameOnly(_) => "name_only",
            Self::Unknown => "unknown",
        }
    }
}
