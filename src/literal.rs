use regex_syntax::{hir::literal::Extractor, parse};

/// Extract the literal prefixes every match of `pattern` must start with, for
/// use as Aho-Corasick prefilter candidates.
///
/// Returns an empty vec (the rule must always be tried) when the pattern
/// cannot be parsed by `regex_syntax` (lookarounds and other PCRE-isms), when
/// the prefix set is unbounded, or when any prefix is shorter than `min_len`:
/// dropping only the short alternatives would let real matches slip past the
/// prefilter.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        let Ok(s) = std::str::from_utf8(lit.as_bytes()) else {
            return Vec::new();
        };
        if s.len() < min_len {
            return Vec::new();
        }
        let s = s.to_lowercase();
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}
