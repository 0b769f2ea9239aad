//! Editable surface - the rendered document the user reviews and edits
//!
//! The surface keeps the document text in a rope together with the marker
//! regions found at highlight time. Markers are addressed by a `MarkerId`
//! assigned once per highlight pass, and by token name for navigation.
//! Wrapper markup is produced on demand by `render_html` and never stored.

use pulldown_cmark_escape::escape_html_body_text;
use ropey::Rope;
use std::ops::Range;

use super::selection::Selection;
use crate::tokens::{apply_highlights, find_markers, strip_highlights, MarkerMatch};

/// How far around the caret to look for a character entity or line break tag
const ENTITY_WINDOW: usize = 10;

/// Line break inserted for a typed newline
const LINE_BREAK: &str = "<br>";

/// Stable address of a marker within one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// A marker region on the surface, in char offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    pub id: MarkerId,
    /// Token name (the marker's addressable identity)
    pub name: String,
    pub range: Range<usize>,
}

/// The rendered, editable view of a document
#[derive(Debug, Clone)]
pub struct Surface {
    buffer: Rope,
    /// Live markers, sorted by position, never overlapping
    markers: Vec<MarkerSpan>,
    selection: Selection,
}

impl Default for Surface {
    fn default() -> Self {
        Self::empty()
    }
}

impl Surface {
    /// Create a surface with no content
    pub fn empty() -> Self {
        Self {
            buffer: Rope::new(),
            markers: Vec::new(),
            selection: Selection::default(),
        }
    }

    /// Build a surface from HTML, highlighting the markers of `tokens`
    ///
    /// Existing wrapper markup is stripped first, so highlighted content can be
    /// loaded again without nesting wrappers.
    pub fn build<S: AsRef<str>>(html: &str, tokens: &[S]) -> Self {
        let text = strip_highlights(html);
        let buffer = Rope::from_str(&text);

        let markers = find_markers(&text, tokens)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| MarkerSpan {
                id: MarkerId(idx),
                range: buffer.byte_to_char(m.start)..buffer.byte_to_char(m.end),
                name: m.name,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            target: "surface",
            markers = markers.len(),
            chars = buffer.len_chars(),
            "surface built"
        );

        Self {
            buffer,
            markers,
            selection: Selection::default(),
        }
    }

    /// Total length in chars
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Canonical content of the surface, without wrapper markup
    pub fn serialize(&self) -> String {
        self.buffer.to_string()
    }

    /// Highlighted markup for display, one wrapper per live marker
    pub fn render_html(&self) -> String {
        let text = self.serialize();
        let matches: Vec<MarkerMatch> = self
            .markers
            .iter()
            .map(|m| MarkerMatch {
                name: m.name.clone(),
                start: self.buffer.char_to_byte(m.range.start),
                end: self.buffer.char_to_byte(m.range.end),
            })
            .collect();
        apply_highlights(&text, &matches)
    }

    pub fn markers(&self) -> &[MarkerSpan] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&MarkerSpan> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// First live marker for `name`, in document order
    pub fn find_marker(&self, name: &str) -> Option<&MarkerSpan> {
        self.markers.iter().find(|m| m.name == name)
    }

    /// Text of the given char range
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.buffer.slice(start..end).to_string()
    }

    // === Caret and selection ===

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn caret(&self) -> usize {
        self.selection.head
    }

    pub fn selected_text(&self) -> String {
        self.slice(self.selection.range())
    }

    /// Select a char range, clamped to the surface
    pub fn select(&mut self, range: Range<usize>) {
        self.selection = Selection::from_range(range);
        self.selection.clamp(self.len_chars());
    }

    /// Select the full text of a marker so the next keystroke replaces it
    pub fn select_marker(&mut self, id: MarkerId) -> bool {
        match self.marker(id).map(|m| m.range.clone()) {
            Some(range) => {
                self.select(range);
                true
            }
            None => false,
        }
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.selection = Selection::collapsed(offset.min(self.len_chars()));
    }

    /// Move left; an active selection collapses to its start
    pub fn move_left(&mut self) {
        let target = if self.selection.is_empty() {
            self.caret().saturating_sub(1)
        } else {
            self.selection.start()
        };
        self.set_caret(target);
    }

    /// Move right; an active selection collapses to its end
    pub fn move_right(&mut self) {
        let target = if self.selection.is_empty() {
            self.caret() + 1
        } else {
            self.selection.end()
        };
        self.set_caret(target);
    }

    pub fn move_to_start(&mut self) {
        self.set_caret(0);
    }

    pub fn move_to_end(&mut self) {
        self.set_caret(self.len_chars());
    }

    // === Mutation ===

    /// Replace the selection with typed text
    ///
    /// The text is escaped the way a content-editable surface would store it,
    /// and newlines become line breaks. Returns whether the surface changed.
    pub fn type_text(&mut self, text: &str) -> bool {
        self.replace_selection(&escape_typed(text))
    }

    /// Replace the selection with raw markup
    pub fn replace_selection(&mut self, text: &str) -> bool {
        let range = self.selection.range();
        self.replace_range(range, text)
    }

    /// Delete the selection, or the unit before the caret
    pub fn delete_backward(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.replace_selection("");
        }
        let caret = self.caret();
        if caret == 0 {
            return false;
        }
        let window = self.slice(caret.saturating_sub(ENTITY_WINDOW)..caret);
        let len = trailing_unit_len(&window);
        self.replace_range(caret - len..caret, "")
    }

    /// Delete the selection, or the unit after the caret
    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_empty() {
            return self.replace_selection("");
        }
        let caret = self.caret();
        if caret >= self.len_chars() {
            return false;
        }
        let window = self.slice(caret..caret + ENTITY_WINDOW);
        let len = leading_unit_len(&window);
        self.replace_range(caret..caret + len, "")
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) -> bool {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        if start == end && text.is_empty() {
            return false;
        }

        self.buffer.remove(start..end);
        self.buffer.insert(start, text);

        let inserted = text.chars().count();
        self.shift_markers(start..end, inserted);
        self.selection = Selection::collapsed(start + inserted);
        true
    }

    /// Keep markers consistent after `edited` was replaced by `inserted` chars
    ///
    /// Markers the edit touches are dropped: their text no longer reads as a
    /// marker. Markers after the edit move with the text.
    fn shift_markers(&mut self, edited: Range<usize>, inserted: usize) {
        let removed = edited.end - edited.start;
        self.markers.retain_mut(|marker| {
            if marker.range.end <= edited.start {
                return true;
            }
            if marker.range.start >= edited.end {
                marker.range.start = marker.range.start - removed + inserted;
                marker.range.end = marker.range.end - removed + inserted;
                return true;
            }
            tracing::debug!(
                target: "surface",
                token = %marker.name,
                id = marker.id.0,
                "marker overwritten by edit"
            );
            false
        });
    }

    /// Check marker bookkeeping against the buffer (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let len = self.len_chars();
        let mut previous_end = 0;
        for marker in &self.markers {
            assert!(
                marker.range.start >= previous_end && marker.range.end <= len,
                "marker {:?} out of order or out of bounds",
                marker
            );
            assert_eq!(
                self.slice(marker.range.clone()),
                crate::tokens::marker_text(&marker.name),
                "marker {:?} no longer holds its marker text",
                marker.id
            );
            previous_end = marker.range.end;
        }
        assert!(self.selection.end() <= len, "selection past end of surface");
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}

/// Escape typed text for storage in HTML content, line breaks become `<br>`
fn escape_typed(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            escaped.push_str(LINE_BREAK);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        escape_html_body_text(&mut escaped, line).expect("writing to a String cannot fail");
    }
    escaped
}

fn is_entity(candidate: &str) -> bool {
    let Some(body) = candidate
        .strip_prefix('&')
        .and_then(|rest| rest.strip_suffix(';'))
    else {
        return false;
    };
    !body.is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
}

fn is_line_break(candidate: &str) -> bool {
    matches!(candidate, "<br>" | "<br/>" | "<br />")
}

/// Length in chars of the editing unit that ends `window`
fn trailing_unit_len(window: &str) -> usize {
    let ends_unit = window.ends_with(';') || window.ends_with('>');
    if ends_unit {
        if let Some(start) = window.rfind(['&', '<']) {
            let candidate = &window[start..];
            if is_entity(candidate) || is_line_break(candidate) {
                return candidate.chars().count();
            }
        }
    }
    1
}

/// Length in chars of the editing unit that starts `window`
fn leading_unit_len(window: &str) -> usize {
    let close = match window.chars().next() {
        Some('&') => ';',
        Some('<') => '>',
        _ => return 1,
    };
    if let Some(end) = window.find(close) {
        let candidate = &window[..=end];
        if is_entity(candidate) || is_line_break(candidate) {
            return candidate.chars().count();
        }
    }
    1
}
