//! View - render the model for the terminal and as highlighted HTML
//!
//! Rendering is a pure function of the model. The terminal view shows the
//! review card: title, status line, the missing-data warning, the draft with
//! caret and selection, and the current notification.

use crate::model::{AppModel, EditMode, NoticeKind, Selection};

/// Card title
pub const TITLE: &str = "Minuta gerada";

/// Heading of the missing-data warning block
pub const WARNING_HEADING: &str = "Atenção: Alguns dados não foram encontrados";

/// Caret glyph drawn into the draft while editing
const CARET: char = '│';
const SELECTION_OPEN: char = '⟦';
const SELECTION_CLOSE: char = '⟧';

/// Render the full review card as plain text
pub fn render(model: &AppModel) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    let mode = match model.session.mode {
        EditMode::View => "visualização",
        EditMode::Edit => "edição",
    };
    out.push_str(&format!(" [{}]\n", mode));
    out.push_str(&model.ui.status_message);
    out.push('\n');

    if let Some(document) = model.document() {
        let warning = render_warning(&model.outstanding_tokens());
        if !warning.is_empty() {
            out.push('\n');
            out.push_str(&warning);
        }

        out.push('\n');
        let surface = document.surface();
        let text = surface.serialize();
        if model.is_editing() {
            out.push_str(&decorate_selection(&text, surface.selection()));
        } else {
            out.push_str(&text);
        }
        out.push('\n');
    }

    if let Some(message) = &model.ui.transient_message {
        let prefix = match message.kind {
            NoticeKind::Info => "»",
            NoticeKind::Error => "!",
        };
        out.push_str(&format!("\n{} {}\n", prefix, message.text));
    }

    out
}

/// Missing-data warning listing the outstanding tokens as chips
///
/// Empty when nothing is outstanding.
pub fn render_warning(outstanding: &[String]) -> String {
    if outstanding.is_empty() {
        return String::new();
    }
    let chips: Vec<String> = outstanding.iter().map(|name| format!("[{}]", name)).collect();
    format!(
        "{}\n{}\nUse :focus NOME para ir até o campo.\n",
        WARNING_HEADING,
        chips.join(" ")
    )
}

/// Highlighted HTML of the current draft (empty without a document)
pub fn render_html(model: &AppModel) -> String {
    model
        .document()
        .map(|doc| doc.surface().render_html())
        .unwrap_or_default()
}

/// Mark the caret or the selected range in `text`
fn decorate_selection(text: &str, selection: Selection) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let (start, end) = (selection.start(), selection.end());
    let mut count = 0;
    for ch in text.chars() {
        if count == start {
            out.push(if selection.is_empty() { CARET } else { SELECTION_OPEN });
        }
        if count == end && !selection.is_empty() {
            out.push(SELECTION_CLOSE);
        }
        out.push(ch);
        count += 1;
    }
    if count == start {
        out.push(if selection.is_empty() { CARET } else { SELECTION_OPEN });
    }
    if count == end && !selection.is_empty() {
        out.push(SELECTION_CLOSE);
    }
    out
}
