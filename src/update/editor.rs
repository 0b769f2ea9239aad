//! Editable surface controller and token navigation

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::{AppModel, EditMode, Surface};

/// Handle editor messages (edit mode, navigation, caret)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::EnterEdit => enter_edit(model),
        EditorMsg::ExitEdit => exit_edit(model),
        EditorMsg::ToggleEdit => {
            if model.is_editing() {
                exit_edit(model)
            } else {
                enter_edit(model)
            }
        }
        EditorMsg::FocusToken(name) => focus_token(model, &name),
        EditorMsg::MoveCaret(Direction::Left) => with_caret(model, Surface::move_left),
        EditorMsg::MoveCaret(Direction::Right) => with_caret(model, Surface::move_right),
        EditorMsg::MoveCaretToStart => with_caret(model, Surface::move_to_start),
        EditorMsg::MoveCaretToEnd => with_caret(model, Surface::move_to_end),
        EditorMsg::SetCaret(offset) => with_caret(model, |s| s.set_caret(offset)),
        EditorMsg::Select { start, end } => with_caret(model, |s| s.select(start..end)),
    }
}

/// VIEW -> EDIT. No-op without a document or when already editing.
pub fn enter_edit(model: &mut AppModel) -> Option<Cmd> {
    if model.document.is_none() || model.session.is_editing() {
        return None;
    }
    model.session.mode = EditMode::Edit;
    model.ui.set_status("Editando minuta");
    tracing::debug!(target: "session", "entered edit mode");
    Some(Cmd::Redraw)
}

/// EDIT -> VIEW
///
/// The surface becomes the new canonical content. A navigation still waiting
/// for its keystroke is dropped: it can no longer fire.
pub fn exit_edit(model: &mut AppModel) -> Option<Cmd> {
    if !model.session.is_editing() {
        return None;
    }
    if let Some(document) = model.document.as_mut() {
        document.sync_from_surface();
    }
    model.session.revoke_pending();
    model.session.focused_token = None;
    model.session.mode = EditMode::View;
    model.ui.set_status("Revise sua minuta");
    tracing::debug!(target: "session", "left edit mode");
    Some(Cmd::Redraw)
}

/// Jump to the marker of `name` and select it
///
/// Silently does nothing when no marker for `name` is on the surface: the
/// token may already have been filled in. Otherwise switches to EDIT, selects
/// the whole marker and arms a one-shot listener that resolves the token on
/// the next edit, replacing any listener from an earlier navigation.
pub fn focus_token(model: &mut AppModel, name: &str) -> Option<Cmd> {
    let marker_id = model
        .document
        .as_ref()?
        .surface()
        .find_marker(name)
        .map(|m| m.id);

    let Some(marker_id) = marker_id else {
        tracing::debug!(target: "session", token = %name, "no marker to focus");
        return None;
    };

    if !model.session.is_editing() {
        enter_edit(model);
    }

    model
        .document
        .as_mut()?
        .surface_mut()
        .select_marker(marker_id);

    model.session.focused_token = Some(name.to_string());
    model.session.subscribe_next_keystroke(name);

    let duration = model.config.notification_duration();
    model
        .ui
        .notify(format!("Campo {} selecionado. Digite para preencher.", name), duration);

    Some(Cmd::Redraw)
}

/// Caret movement, EDIT only. Movement is not an edit keystroke.
fn with_caret(model: &mut AppModel, f: impl FnOnce(&mut Surface)) -> Option<Cmd> {
    if !model.session.is_editing() {
        return None;
    }
    let surface = model.document.as_mut()?.surface_mut();
    let before = surface.selection();
    f(surface);
    (surface.selection() != before).then_some(Cmd::Redraw)
}
