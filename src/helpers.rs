use std::borrow::Cow;

/// Text of capture `group`, or `None` if it did not participate or is empty.
pub(crate) fn capture<'a>(captures: &fancy_regex::Captures<'a>, group: usize) -> Option<Cow<'a, str>> {
    captures
        .get(group)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(Cow::Borrowed)
}

/// `None` for empty values so absent and blank read the same downstream.
pub(crate) fn non_empty(value: Cow<'_, str>) -> Option<Cow<'_, str>> {
    (!value.is_empty()).then_some(value)
}

/// iOS and macOS report versions as `17_1_2`.
pub(crate) fn normalize_version(version: Cow<'_, str>) -> Cow<'_, str> {
    if version.contains('_') {
        Cow::Owned(version.replace('_', "."))
    } else {
        version
    }
}

/// Operating systems that only ship on desktop hardware.
pub(crate) fn is_desktop_os(name: &str) -> bool {
    matches!(
        name,
        "Windows" | "Mac OS" | "Linux" | "Ubuntu" | "Fedora" | "Debian" | "Chrome OS" | "FreeBSD"
    )
}
