//! Marker location inside generated HTML
//!
//! Markers are matched literally: token names are escaped before being
//! turned into a pattern, so names such as `A.B` or `VALOR (R$)` only ever
//! match their own text.

use regex::Regex;

use super::{MARKER_CLOSE, MARKER_OPEN, MARKER_SUFFIX};

/// A single marker occurrence, in byte offsets into the searched text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Token name the marker belongs to
    pub name: String,
    /// Byte offset of the opening `[[`
    pub start: usize,
    /// Byte offset just past the closing `]]`
    pub end: usize,
}

impl MarkerMatch {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && self.start < end
    }
}

/// The literal marker text the backend emits for `name`
pub fn marker_text(name: &str) -> String {
    format!("{MARKER_OPEN}{name}{MARKER_SUFFIX}{MARKER_CLOSE}")
}

/// Whether `name` can appear inside a marker at all
///
/// Names may contain any character except the closing `]]` sequence.
pub fn is_valid_token_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(MARKER_CLOSE)
}

fn marker_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        "{}{}{}{}",
        regex::escape(MARKER_OPEN),
        regex::escape(name),
        regex::escape(MARKER_SUFFIX),
        regex::escape(MARKER_CLOSE)
    ))
}

/// Locate every marker for the given tokens
///
/// Tokens are processed in list order and each occurrence goes to the first
/// token that claims it; a later match overlapping an earlier one is skipped.
/// The result is sorted by position. Unknown or absent tokens simply produce
/// no matches.
pub fn find_markers<S: AsRef<str>>(html: &str, tokens: &[S]) -> Vec<MarkerMatch> {
    let mut found: Vec<MarkerMatch> = Vec::new();

    for token in tokens {
        let name = token.as_ref();
        if !is_valid_token_name(name) {
            tracing::debug!(target: "tokens", token = %name, "skipping invalid token name");
            continue;
        }

        let pattern = match marker_pattern(name) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!(target: "tokens", token = %name, "failed to build marker pattern: {}", e);
                continue;
            }
        };

        for m in pattern.find_iter(html) {
            if found.iter().any(|f| f.overlaps(m.start(), m.end())) {
                tracing::trace!(
                    target: "tokens",
                    token = %name,
                    start = m.start(),
                    "occurrence already claimed by an earlier token"
                );
                continue;
            }
            found.push(MarkerMatch {
                name: name.to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }

    found.sort_by_key(|m| m.start);
    found
}

/// Scan HTML for well-formed markers and return their token names
///
/// Names come back in document order without duplicates. Names that would
/// span markup (contain `<` or `>`) or line breaks are ignored.
pub fn discover_tokens(html: &str) -> Vec<String> {
    let terminator = format!("{MARKER_SUFFIX}{MARKER_CLOSE}");
    let mut names: Vec<String> = Vec::new();
    let mut search_from = 0;

    while let Some(rel) = html[search_from..].find(&terminator) {
        let suffix_at = search_from + rel;
        search_from = suffix_at + terminator.len();

        let Some(open_at) = html[..suffix_at].rfind(MARKER_OPEN) else {
            continue;
        };
        let name = &html[open_at + MARKER_OPEN.len()..suffix_at];

        let spans_markup = name.contains(['<', '>', '\n', '\r']);
        if !is_valid_token_name(name) || spans_markup {
            continue;
        }
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}
