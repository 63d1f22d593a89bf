use std::borrow::Cow;

/// Expand `$1`..`$9` in a rule template with the rule's capture groups, then
/// trim surrounding whitespace and trailing dots.
///
/// Groups that did not participate expand to nothing. A `$` not followed by a
/// digit is kept. Templates without placeholders are borrowed.
pub(crate) fn substitute<'a>(template: &'a str, captures: &fancy_regex::Captures<'_>) -> Cow<'a, str> {
    expand(template, |idx| captures.get(idx).map(|m| m.as_str()))
}

fn expand<'a, 'c>(template: &'a str, group: impl Fn(usize) -> Option<&'c str>) -> Cow<'a, str> {
    if !template.contains('$') {
        return Cow::Borrowed(tidy(template));
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(d) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(text) = group(d as usize) {
                    result.push_str(text);
                }
                continue;
            }
        }
        result.push(c);
    }

    let tidied = tidy(&result);
    if tidied.len() == result.len() {
        Cow::Owned(result)
    } else {
        Cow::Owned(tidied.to_owned())
    }
}

fn tidy(s: &str) -> &str {
    s.trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.')
}
