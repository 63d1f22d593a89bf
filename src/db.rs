use serde::Deserialize;

// ---------------------------------------------------------------------------
// Operating systems  (regexes/oss.yml)
// Clients            (regexes/clients.yml)
//
// Both are ordered lists; the first rule whose regex matches wins.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ProductEntry {
    pub regex: String,
    pub name: String,
    /// `$N` template; when absent the first capture group is the version.
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Devices  (regexes/devices.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceEntry {
    pub regex: String,
    #[serde(default)]
    pub model: Option<String>,
    /// `desktop`, `smartphone` or `tablet`.
    #[serde(default)]
    pub device: Option<String>,
}

pub(crate) const OSS_FILE: &str = "oss.yml";
pub(crate) const CLIENTS_FILE: &str = "clients.yml";
pub(crate) const DEVICES_FILE: &str = "devices.yml";
