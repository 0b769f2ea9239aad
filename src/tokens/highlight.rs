//! Highlight wrappers around marker occurrences
//!
//! Each marker is wrapped in a `<span>` carrying the token name as its
//! addressable identity (`data-token`) and a distinct visual treatment. The
//! wrapper is presentation only: the marker text inside it is left untouched.

use pulldown_cmark_escape::escape_html;

use super::matcher::{find_markers, MarkerMatch};

/// CSS class carried by every marker wrapper
pub const WRAPPER_CLASS: &str = "token-missing";

/// Inline style applied to marker wrappers
pub const WRAPPER_STYLE: &str = "background-color: #fde7e9; color: #b3261e; font-weight: 600;";

/// Closing tag of a marker wrapper
pub const WRAPPER_CLOSE: &str = "</span>";

/// Leading part of every wrapper's opening tag, up to the token name
fn wrapper_prefix() -> String {
    format!("<span class=\"{WRAPPER_CLASS}\" data-token=\"")
}

/// Escape a value for use inside a double-quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    escape_html(&mut escaped, value).expect("writing to a String cannot fail");
    escaped
}

/// Opening tag of the wrapper for `name`
pub fn wrapper_open(name: &str) -> String {
    format!(
        "{}{}\" style=\"{WRAPPER_STYLE}\">",
        wrapper_prefix(),
        escape_attr(name)
    )
}

fn is_wrapped(html: &str, marker: &MarkerMatch) -> bool {
    html[..marker.start].ends_with(&wrapper_open(&marker.name))
        && html[marker.end..].starts_with(WRAPPER_CLOSE)
}

/// Wrap every marker occurrence in `html`
///
/// `markers` must come from `find_markers` on the same text. Markers that are
/// already wrapped for the same token are left alone, so the output is stable
/// when fed back in with the same token set.
pub fn apply_highlights(html: &str, markers: &[MarkerMatch]) -> String {
    let mut out = String::with_capacity(html.len() + markers.len() * 128);
    let mut copied_to = 0;

    for marker in markers {
        let in_bounds = marker.start >= copied_to
            && marker.end <= html.len()
            && html.is_char_boundary(marker.start)
            && html.is_char_boundary(marker.end);
        if !in_bounds {
            tracing::warn!(
                target: "tokens",
                token = %marker.name,
                start = marker.start,
                "marker outside of text, skipping"
            );
            continue;
        }
        if is_wrapped(html, marker) {
            continue;
        }

        out.push_str(&html[copied_to..marker.start]);
        out.push_str(&wrapper_open(&marker.name));
        out.push_str(&html[marker.start..marker.end]);
        out.push_str(WRAPPER_CLOSE);
        copied_to = marker.end;
    }

    out.push_str(&html[copied_to..]);
    out
}

/// Locate and wrap the markers of `tokens` in one pass
pub fn highlight<S: AsRef<str>>(html: &str, tokens: &[S]) -> String {
    apply_highlights(html, &find_markers(html, tokens))
}

/// Remove marker wrappers, keeping the marker text they enclose
pub fn strip_highlights(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let prefix = wrapper_prefix();
    let mut rest = html;

    while let Some(open_at) = rest.find(prefix.as_str()) {
        let after_prefix = &rest[open_at + prefix.len()..];
        let Some(tag_end) = after_prefix.find('>') else {
            break;
        };
        let inner = &after_prefix[tag_end + 1..];
        let Some(close_at) = inner.find(WRAPPER_CLOSE) else {
            break;
        };

        out.push_str(&rest[..open_at]);
        out.push_str(&inner[..close_at]);
        rest = &inner[close_at + WRAPPER_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<p>Comprador: [[NOME_COMPRADOR NÃO ENCONTRADO]]</p>";

    #[test]
    fn test_wraps_marker_with_identity() {
        let html = highlight(DOC, &["NOME_COMPRADOR"]);
        assert!(html.contains("data-token=\"NOME_COMPRADOR\""));
        assert!(html.contains(&format!(
            "{}[[NOME_COMPRADOR NÃO ENCONTRADO]]{}",
            wrapper_open("NOME_COMPRADOR"),
            WRAPPER_CLOSE
        )));
        assert_eq!(html.matches(WRAPPER_CLASS).count(), 1);
    }

    #[test]
    fn test_no_tokens_is_pass_through() {
        let empty: [&str; 0] = [];
        assert_eq!(highlight(DOC, &empty), DOC);
    }

    #[test]
    fn test_highlight_is_deterministic() {
        assert_eq!(highlight(DOC, &["NOME_COMPRADOR"]), highlight(DOC, &["NOME_COMPRADOR"]));
    }

    #[test]
    fn test_highlight_does_not_double_wrap() {
        let once = highlight(DOC, &["NOME_COMPRADOR"]);
        let twice = highlight(&once, &["NOME_COMPRADOR"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_attribute_is_escaped() {
        let html = "[[A\"<B> NÃO ENCONTRADO]]";
        let highlighted = highlight(html, &["A\"<B>"]);
        assert!(highlighted.contains("data-token=\"A&quot;&lt;B&gt;\""));
        assert_eq!(strip_highlights(&highlighted), html);
    }

    #[test]
    fn test_strip_restores_original() {
        let highlighted = highlight(DOC, &["NOME_COMPRADOR"]);
        assert_eq!(strip_highlights(&highlighted), DOC);
    }

    #[test]
    fn test_wrapper_carries_class_constant() {
        let open = wrapper_open("X");
        assert!(open.starts_with(&format!("<span class=\"{WRAPPER_CLASS}\"")));
        assert!(wrapper_prefix().contains(WRAPPER_CLASS));
        let marker = "[[X NÃO ENCONTRADO]]";
        assert_eq!(strip_highlights(&highlight(marker, &["X"])), marker);
    }

    #[test]
    fn test_attribute_escapes_ampersand() {
        assert_eq!(escape_attr("A&B"), "A&amp;B");
    }

    #[test]
    fn test_strip_leaves_other_spans() {
        let html = "<span class=\"other\">x</span>";
        assert_eq!(strip_highlights(html), html);
    }
}
