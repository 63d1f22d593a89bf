use std::borrow::Cow;
use std::path::Path;

use crate::db;
use crate::error::Result;
use crate::helpers::{capture, is_desktop_os, non_empty, normalize_version};
use crate::parser::CompiledParser;
use crate::parser_data::{DeviceData, ProductData};
use crate::substitution::substitute;
use crate::types::{DeviceType, UserAgentInfo};

/// Turns a raw `User-Agent` header into [`UserAgentInfo`].
///
/// Implementations must be total: malformed, empty or unrecognised input
/// yields a value with every field absent rather than an error.
pub trait ParseUserAgent {
    fn parse<'a>(&'a self, raw: &'a str) -> UserAgentInfo<'a>;
}

const BUNDLED_OSS: &str = include_str!("../regexes/oss.yml");
const BUNDLED_CLIENTS: &str = include_str!("../regexes/clients.yml");
const BUNDLED_DEVICES: &str = include_str!("../regexes/devices.yml");

/// Rule-driven parser: three ordered YAML rule lists (operating systems,
/// clients, devices), first match wins in each.
pub struct UserAgentParser {
    os_parser: CompiledParser<ProductData>,
    client_parser: CompiledParser<ProductData>,
    device_parser: CompiledParser<DeviceData>,
}

impl UserAgentParser {
    /// The rule set shipped in `regexes/`.
    pub fn bundled() -> Result<Self> {
        Self::from_sources(BUNDLED_OSS, BUNDLED_CLIENTS, BUNDLED_DEVICES)
    }

    /// Load `oss.yml`, `clients.yml` and `devices.yml` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let oss = std::fs::read_to_string(dir.join(db::OSS_FILE))?;
        let clients = std::fs::read_to_string(dir.join(db::CLIENTS_FILE))?;
        let devices = std::fs::read_to_string(dir.join(db::DEVICES_FILE))?;
        Self::from_sources(&oss, &clients, &devices)
    }

    /// Build from the YAML text of the three rule lists.
    pub fn from_sources(oss: &str, clients: &str, devices: &str) -> Result<Self> {
        let os_entries: Vec<db::ProductEntry> = serde_yaml::from_str(oss)?;
        let client_entries: Vec<db::ProductEntry> = serde_yaml::from_str(clients)?;
        let device_entries: Vec<db::DeviceEntry> = serde_yaml::from_str(devices)?;

        let ((os_parser, client_parser), device_parser) = rayon::join(
            || {
                rayon::join(
                    || CompiledParser::<ProductData>::build(os_entries.into_iter().map(Into::into)),
                    || CompiledParser::<ProductData>::build(client_entries.into_iter().map(Into::into)),
                )
            },
            || CompiledParser::<DeviceData>::build(device_entries.into_iter().map(Into::into)),
        );
        let (os_parser, client_parser, device_parser) = (os_parser?, client_parser?, device_parser?);

        tracing::debug!(
            oss = os_parser.len(),
            clients = client_parser.len(),
            devices = device_parser.len(),
            "loaded user-agent rules"
        );

        Ok(Self {
            os_parser,
            client_parser,
            device_parser,
        })
    }

    /// Parse a User-Agent string.
    ///
    /// The result borrows from both `self` (rule templates) and `ua`.
    pub fn parse<'a>(&'a self, ua: &'a str) -> UserAgentInfo<'a> {
        let trimmed = ua.trim();
        if trimmed.is_empty() {
            return UserAgentInfo::default();
        }

        let mut info = UserAgentInfo {
            raw: Some(Cow::Borrowed(ua)),
            ..Default::default()
        };

        // 1. Operating system
        if let Some(m) = self.os_parser.match_first(trimmed) {
            info.os = non_empty(substitute(&m.data.name, &m.captures));
            info.os_version = product_version(m.data, &m.captures).map(normalize_version);
        }

        // 2. Client (browser / app)
        if let Some(m) = self.client_parser.match_first(trimmed) {
            info.name = non_empty(substitute(&m.data.name, &m.captures));
            info.version = product_version(m.data, &m.captures);
        }

        // 3. Device model and type
        if let Some(m) = self.device_parser.match_first(trimmed) {
            info.model = m
                .data
                .model_template
                .as_deref()
                .and_then(|tpl| non_empty(substitute(tpl, &m.captures)));
            info.device_type = m.data.device_type;
        }

        // 4. Android without an explicit type: "Mobile" marks phones.
        if info.device_type.is_none() && info.os() == Some("Android") {
            info.device_type = Some(if trimmed.contains("Mobile") {
                DeviceType::Smartphone
            } else {
                DeviceType::Tablet
            });
        }

        // 5. Desktop-only operating systems imply a desktop.
        if info.device_type.is_none() && info.os().is_some_and(is_desktop_os) {
            info.device_type = Some(DeviceType::Desktop);
        }

        info
    }
}

impl ParseUserAgent for UserAgentParser {
    fn parse<'a>(&'a self, raw: &'a str) -> UserAgentInfo<'a> {
        UserAgentParser::parse(self, raw)
    }
}

fn product_version<'a>(
    data: &'a ProductData,
    captures: &fancy_regex::Captures<'a>,
) -> Option<Cow<'a, str>> {
    match &data.version_template {
        Some(tpl) => non_empty(substitute(tpl, captures)),
        None => capture(captures, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> UserAgentParser {
        UserAgentParser::bundled().unwrap()
    }

    #[test]
    fn empty_and_garbage_are_all_absent() {
        let p = parser();
        assert_eq!(p.parse(""), UserAgentInfo::default());
        assert_eq!(p.parse("   "), UserAgentInfo::default());

        let garbage = p.parse("\u{0}\u{1}not a user agent");
        assert_eq!(garbage.model(), None);
        assert_eq!(garbage.name(), None);
        assert_eq!(garbage.os(), None);
        assert_eq!(garbage.device_type, None);
    }

    #[test]
    fn element_ios() {
        let p = parser();
        let ua = p.parse("Element/1.9.7 (iPhone10,6; iOS 16.3; Scale/3.00)");
        assert_eq!(ua.name(), Some("Element"));
        assert_eq!(ua.version(), Some("1.9.7"));
        assert_eq!(ua.model(), Some("iPhone10,6"));
        assert_eq!(ua.os(), Some("iOS"));
        assert_eq!(ua.os_version(), Some("16.3"));
        assert_eq!(ua.device_type, Some(DeviceType::Smartphone));
    }

    #[test]
    fn element_android_debug_build() {
        let p = parser();
        let ua = p.parse(
            "Element dbg/1.5.0-dev (Xiaomi Mi 9T; Android 11; RKQ1.200826.002 test-keys; \
             Flavour GooglePlay; MatrixAndroidSdk2 1.5.2)",
        );
        assert_eq!(ua.name(), Some("Element dbg"));
        assert_eq!(ua.version(), Some("1.5.0-dev"));
        assert_eq!(ua.model(), Some("Xiaomi Mi 9T"));
        assert_eq!(ua.os(), Some("Android"));
        assert_eq!(ua.os_version(), Some("11"));
    }

    #[test]
    fn desktop_firefox() {
        let p = parser();
        let ua = p.parse(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0",
        );
        assert_eq!(ua.name(), Some("Firefox"));
        assert_eq!(ua.version(), Some("120.0"));
        assert_eq!(ua.os(), Some("Windows"));
        assert_eq!(ua.os_version(), Some("10.0"));
        assert_eq!(ua.model(), None);
        assert_eq!(ua.device_type, Some(DeviceType::Desktop));
    }

    #[test]
    fn iphone_safari_normalizes_version() {
        let p = parser();
        let ua = p.parse(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1",
        );
        assert_eq!(ua.name(), Some("Safari"));
        assert_eq!(ua.os(), Some("iOS"));
        assert_eq!(ua.os_version(), Some("17.1"));
        assert_eq!(ua.model(), Some("iPhone"));
    }

    #[test]
    fn android_reduced_model_is_dropped() {
        let p = parser();
        let ua = p.parse(
            "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) \
             Chrome/120.0.0.0 Mobile Safari/537.36",
        );
        assert_eq!(ua.model(), None);
        assert_eq!(ua.name(), Some("Chrome"));
        assert_eq!(ua.os(), Some("Android"));
        assert_eq!(ua.device_type, Some(DeviceType::Smartphone));
    }

    #[test]
    fn raw_is_kept() {
        let p = parser();
        let raw = "curl/8.4.0";
        let ua = p.parse(raw);
        assert_eq!(ua.raw.as_deref(), Some(raw));
        assert_eq!(ua.name(), Some("curl"));
        assert_eq!(ua.os(), None);
    }

    #[test]
    fn through_the_trait() {
        let p = parser();
        let dyn_parser: &dyn ParseUserAgent = &p;
        assert_eq!(dyn_parser.parse("curl/8.4.0").version(), Some("8.4.0"));
    }
}
