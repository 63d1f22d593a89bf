use aho_corasick::AhoCorasick;
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::extract_literals;

/// Word-boundary-like prefix applied to every rule regex: start of string,
/// or a character that cannot be part of a product token.
const BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_\-]|[^A-Z0-9\-]_)";

/// Shortest literal worth handing to the prefilter.
const MIN_LITERAL_LEN: usize = 3;

/// Build the full boundary-prefixed, case-insensitive regex string.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i){}(?:{})", BOUNDARY_PREFIX, pattern)
}

/// Compile a rule regex with the boundary prefix and case-insensitive flag.
pub(crate) fn compile_regex(pattern: &str) -> Result<fancy_regex::Regex> {
    Ok(fancy_regex::Regex::new(&full_pattern(pattern))?)
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: fancy_regex::Captures<'a>,
}

// ---------------------------------------------------------------------------
// CompiledParser: ordered rule list, first match wins
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + fancy-regex rules.
///
/// `T` is the associated data for each rule (OS name, client name, ...).
pub(crate) struct CompiledParser<T> {
    regexes: Vec<fancy_regex::Regex>,
    data: Vec<T>,
    /// Literal prefixes of every prefiltered rule; `None` when no rule has any.
    prefilter: Option<AhoCorasick>,
    /// Maps prefilter pattern index → rule index.
    literal_to_entry: Vec<usize>,
    /// Rules without usable literals, tried on every input.
    always_candidate: Vec<bool>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from an iterator of (regex_pattern, data) pairs,
    /// compiling the regexes in parallel.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self> {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let compiled: Vec<(fancy_regex::Regex, Vec<String>)> = patterns
            .par_iter()
            .map(|pattern| -> Result<_> {
                Ok((compile_regex(pattern)?, extract_literals(pattern, MIN_LITERAL_LEN)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut regexes = Vec::with_capacity(compiled.len());
        let mut literals: Vec<String> = Vec::new();
        let mut literal_to_entry: Vec<usize> = Vec::new();
        let mut always_candidate = Vec::with_capacity(compiled.len());

        for (idx, (regex, entry_literals)) in compiled.into_iter().enumerate() {
            regexes.push(regex);
            always_candidate.push(entry_literals.is_empty());
            for literal in entry_literals {
                literals.push(literal);
                literal_to_entry.push(idx);
            }
        }

        let prefilter = if literals.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&literals)?,
            )
        };

        tracing::debug!(
            rules = regexes.len(),
            prefiltered = always_candidate.iter().filter(|always| !**always).count(),
            "compiled rule set"
        );

        Ok(Self {
            regexes,
            data,
            prefilter,
            literal_to_entry,
            always_candidate,
        })
    }

    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    /// Find the first matching rule, preserving rule order.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        let mut candidate = self.always_candidate.clone();
        if let Some(prefilter) = &self.prefilter {
            for m in prefilter.find_overlapping_iter(ua) {
                candidate[self.literal_to_entry[m.pattern().as_usize()]] = true;
            }
        }

        candidate
            .iter()
            .enumerate()
            .filter(|(_, is_candidate)| **is_candidate)
            .find_map(|(idx, _)| match self.regexes[idx].captures(ua) {
                Ok(Some(captures)) => Some(MatchResult {
                    data: &self.data[idx],
                    captures,
                }),
                _ => None,
            })
    }
}
