//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod export;
mod session;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::{on_content_changed, update_document};
pub use editor::{enter_edit, exit_edit, focus_token, update_editor};
pub use export::update_export;
pub use session::update_session;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Session(m) => session::update_session(model, m),
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Export(m) => export::update_export(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after session state and logs diffs for debugging.
/// Filters out noisy messages like Tick from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SessionSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    if let Some(document) = model.document() {
        document.assert_invariants();
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::FocusToken("NOME")`
/// - `Document::InsertChar('x')`
/// - `Export::CopyToClipboard`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Session(m) => match m {
            // Drafts can be large; keep the log line short
            crate::messages::SessionMsg::Load(result) => format!(
                "Session::Load({} bytes, {} tokens)",
                result.html.len(),
                result.unresolved_tokens.len()
            ),
            other => format!("Session::{:?}", other),
        },
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Export(m) => format!("Export::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => match m {
            crate::messages::AppMsg::GenerationCompleted(Ok(_)) => {
                "App::GenerationCompleted(Ok)".to_string()
            }
            other => format!("App::{:?}", other),
        },
    }
}
