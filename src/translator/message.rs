use std::borrow::Cow;

use crate::error::{Error, Result};

use super::Params;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Placeholder(String),
}

/// A catalog message, pre-split into literal text and `%(name)s` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    parts: Vec<Part>,
}

impl Message {
    /// Parse a message template. `%%` is a literal percent sign; a `%` not
    /// followed by `(` or `%` is kept as-is.
    pub fn parse(key: &str, template: &str) -> Result<Self> {
        let invalid = || Error::InvalidPlaceholder {
            key: key.to_owned(),
        };

        let mut parts = Vec::new();
        let mut text = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                text.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    text.push('%');
                }
                Some('(') => {
                    chars.next();
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some(')') => break,
                            Some(ch) => name.push(ch),
                            None => return Err(invalid()),
                        }
                    }
                    if name.is_empty() || chars.next() != Some('s') {
                        return Err(invalid());
                    }
                    if !text.is_empty() {
                        parts.push(Part::Text(std::mem::take(&mut text)));
                    }
                    parts.push(Part::Placeholder(name));
                }
                _ => text.push('%'),
            }
        }

        if !text.is_empty() {
            parts.push(Part::Text(text));
        }

        Ok(Self { parts })
    }

    /// Names of the placeholders, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Placeholder(name) => Some(name.as_str()),
            Part::Text(_) => None,
        })
    }

    /// Fill every placeholder from `params`. Extra params are ignored.
    pub fn format(&self, key: &str, params: &Params) -> Result<String> {
        self.render(params, |name| {
            Err(Error::MissingArgument {
                key: key.to_owned(),
                argument: name.to_owned(),
            })
        })
    }

    /// Like [`Message::format`], but a missing argument renders as an empty
    /// string instead of failing.
    pub fn format_lossy(&self, params: &Params) -> String {
        let filled: Result<String> = self.render(params, |_| Ok(Cow::Borrowed("")));
        filled.unwrap_or_default()
    }

    fn render<'p>(
        &self,
        params: &'p Params,
        mut on_missing: impl FnMut(&str) -> Result<Cow<'p, str>>,
    ) -> Result<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Placeholder(name) => match params.get(name.as_str()) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&on_missing(name.as_str())?),
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fills_named_placeholders() {
        let msg = Message::parse("k", "%(client_name)s on %(device_name)s").unwrap();
        let out = msg
            .format("k", &params(&[("client_name", "Element"), ("device_name", "iPhone 13")]))
            .unwrap();
        assert_eq!(out, "Element on iPhone 13");
    }

    #[test]
    fn literal_percent() {
        let msg = Message::parse("k", "100%% of %(name)s, 5% off").unwrap();
        let out = msg.format("k", &params(&[("name", "it")])).unwrap();
        assert_eq!(out, "100% of it, 5% off");
    }

    #[test]
    fn unterminated_placeholder_is_rejected() {
        assert!(matches!(
            Message::parse("k", "%(name"),
            Err(Error::InvalidPlaceholder { .. })
        ));
        assert!(matches!(
            Message::parse("k", "%(name)d"),
            Err(Error::InvalidPlaceholder { .. })
        ));
    }

    #[test]
    fn missing_argument() {
        let msg = Message::parse("k", "%(name)s for %(platform)s").unwrap();
        let err = msg.format("k", &params(&[("name", "Firefox")])).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { argument, .. } if argument == "platform"));
        assert_eq!(msg.format_lossy(&params(&[("name", "Firefox")])), "Firefox for ");
    }

    #[test]
    fn lists_placeholders() {
        let msg = Message::parse("k", "%(a)s and %(b)s").unwrap();
        assert_eq!(msg.placeholders().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
