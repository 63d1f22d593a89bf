use std::borrow::Cow;

use super::DeviceType;

/// Structured attributes extracted from a raw `User-Agent` header.
///
/// Every field is independently optional; no combination is invalid. Fields
/// borrow from the raw header (or the parser's rule data) where possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentInfo<'a> {
    /// Device model, e.g. `iPhone 13` or `Pixel 7`.
    pub model: Option<Cow<'a, str>>,
    /// Browser or application name.
    pub name: Option<Cow<'a, str>>,
    /// Browser or application version.
    pub version: Option<Cow<'a, str>>,
    /// Operating system / platform name.
    pub os: Option<Cow<'a, str>>,
    pub os_version: Option<Cow<'a, str>>,
    pub device_type: Option<DeviceType>,
    /// The header this was parsed from, if any.
    pub raw: Option<Cow<'a, str>>,
}

impl<'a> UserAgentInfo<'a> {
    /// Model, treating an empty string as absent.
    pub fn model(&self) -> Option<&str> {
        non_empty(&self.model)
    }

    /// Browser/application name, treating an empty string as absent.
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Operating system, treating an empty string as absent.
    pub fn os(&self) -> Option<&str> {
        non_empty(&self.os)
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(&self.version)
    }

    pub fn os_version(&self) -> Option<&str> {
        non_empty(&self.os_version)
    }

    /// Detach from the borrowed header.
    pub fn into_owned(self) -> UserAgentInfo<'static> {
        let own = |v: Option<Cow<'a, str>>| v.map(|s| Cow::Owned(s.into_owned()));
        UserAgentInfo {
            model: own(self.model),
            name: own(self.name),
            version: own(self.version),
            os: own(self.os),
            os_version: own(self.os_version),
            device_type: self.device_type,
            raw: own(self.raw),
        }
    }
}

fn non_empty<'s>(field: &'s Option<Cow<'_, str>>) -> Option<&'s str> {
    field.as_deref().filter(|s| !s.is_empty())
}
