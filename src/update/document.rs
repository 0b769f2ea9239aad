//! Edit keystrokes and content synchronization

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle edit keystrokes. Ignored outside EDIT.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    if !model.session.is_editing() {
        tracing::debug!(target: "session", ?msg, "keystroke ignored outside edit mode");
        return None;
    }

    let surface = model.document.as_mut()?.surface_mut();
    let changed = match msg {
        DocumentMsg::InsertChar(ch) => surface.type_text(ch.encode_utf8(&mut [0; 4])),
        DocumentMsg::InsertText(text) => surface.type_text(&text),
        DocumentMsg::InsertNewline => surface.type_text("\n"),
        DocumentMsg::DeleteBackward => surface.delete_backward(),
        DocumentMsg::DeleteForward => surface.delete_forward(),
    };

    if !changed {
        return None;
    }

    on_content_changed(model);
    Some(Cmd::Redraw)
}

/// React to a user-driven mutation of the surface
///
/// Keeps the canonical content in step with every keystroke and fires the
/// pending navigation listener, resolving its token exactly once.
pub fn on_content_changed(model: &mut AppModel) {
    let Some(document) = model.document.as_mut() else {
        return;
    };
    document.sync_from_surface();

    let Some(token) = model.session.fire_keystroke() else {
        return;
    };

    if document.tokens_mut().resolve(&token) {
        let remaining = document.tokens().outstanding_count();
        tracing::info!(target: "tokens", %token, remaining, "token resolved");
        if remaining == 0 {
            let duration = model.config.notification_duration();
            model
                .ui
                .notify("Todos os campos pendentes foram preenchidos", duration);
        }
    } else {
        tracing::debug!(target: "tokens", %token, "token was already resolved");
    }
}
