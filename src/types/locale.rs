use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An opaque language tag such as `en`, `fr-CA` or `pt-BR`.
///
/// Tags are stored in canonical form: `_` separators become `-`, the language
/// is lowercased, a script is title-cased and a region is uppercased, so
/// `FR`, `pt_br` and `zh-hant-tw` compare equal to `fr`, `pt-BR` and
/// `zh-Hant-TW`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim();
        let mut canonical = String::with_capacity(tag.len());
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if i > 0 {
                canonical.push('-');
            }
            canonical.push_str(&canonical_subtag(i, subtag));
        }
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag followed by each shorter prefix: `zh-Hant-TW`, `zh-Hant`, `zh`.
    pub fn fallback_chain(&self) -> impl Iterator<Item = &str> + '_ {
        let tag = self.0.as_str();
        std::iter::successors((!tag.is_empty()).then_some(tag), |current| {
            current.rfind('-').map(|idx| &current[..idx])
        })
    }
}

fn canonical_subtag(position: usize, subtag: &str) -> String {
    let alphabetic = subtag.chars().all(|c| c.is_ascii_alphabetic());
    match subtag.len() {
        _ if position == 0 || !alphabetic => subtag.to_ascii_lowercase(),
        2 => subtag.to_ascii_uppercase(),
        4 => {
            let (first, rest) = subtag.split_at(1);
            first.to_ascii_uppercase() + &rest.to_ascii_lowercase()
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
