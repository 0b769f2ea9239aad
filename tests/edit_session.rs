//! Editable surface controller tests - edit mode, keystrokes, round trip

mod common;

use common::{
    backspace, enter_edit, exit_edit, loaded_model, surface_text, test_model, type_chars,
    COMPRADOR_HTML, ESCRITURA_HTML, ESCRITURA_TOKENS,
};
use minuta::messages::{DocumentMsg, EditorMsg, Msg, SessionMsg};
use minuta::model::EditMode;
use minuta::update::update;

// ========================================================================
// Mode transitions
// ========================================================================

#[test]
fn test_starts_in_view_mode() {
    let model = loaded_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    assert_eq!(model.session.mode, EditMode::View);
    assert_eq!(model.edited_content(), "");
}

#[test]
fn test_enter_and_exit_edit() {
    let mut model = loaded_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    enter_edit(&mut model);
    assert!(model.is_editing());
    exit_edit(&mut model);
    assert!(!model.is_editing());
}

#[test]
fn test_enter_edit_without_document_is_noop() {
    let mut model = minuta::AppModel::default();
    let cmd = update(&mut model, Msg::Editor(EditorMsg::EnterEdit));
    assert!(cmd.is_none());
    assert!(!model.is_editing());
}

#[test]
fn test_toggle_edit() {
    let mut model = loaded_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    update(&mut model, Msg::Editor(EditorMsg::ToggleEdit));
    assert!(model.is_editing());
    update(&mut model, Msg::Editor(EditorMsg::ToggleEdit));
    assert!(!model.is_editing());
}

// ========================================================================
// Round trip
// ========================================================================

#[test]
fn test_exit_without_edits_restores_original() {
    let mut model = loaded_model(ESCRITURA_HTML, &ESCRITURA_TOKENS);
    enter_edit(&mut model);
    exit_edit(&mut model);

    assert_eq!(model.edited_content(), ESCRITURA_HTML);
    assert!(!model.document().unwrap().is_dirty());
}

#[test]
fn test_edited_content_never_carries_wrappers() {
    let mut model = loaded_model(ESCRITURA_HTML, &ESCRITURA_TOKENS);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::MoveCaretToEnd));
    type_chars(&mut model, "!");
    exit_edit(&mut model);

    assert!(!model.edited_content().contains("token-missing"));
    assert_eq!(model.edited_content(), format!("{}!", ESCRITURA_HTML));
}

// ========================================================================
// Keystrokes
// ========================================================================

#[test]
fn test_keystrokes_ignored_in_view_mode() {
    let mut model = loaded_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    let cmd = update(&mut model, Msg::insert_char('x'));
    assert!(cmd.is_none());
    assert_eq!(surface_text(&model), COMPRADOR_HTML);
}

#[test]
fn test_typing_updates_edited_content_each_keystroke() {
    let mut model = loaded_model("<p>Olá</p>", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::SetCaret(6)));

    type_chars(&mut model, "!");
    assert_eq!(model.edited_content(), "<p>Olá!</p>");
    type_chars(&mut model, "?");
    assert_eq!(model.edited_content(), "<p>Olá!?</p>");
}

#[test]
fn test_typed_markup_is_escaped() {
    let mut model = loaded_model("", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::insert_text("a < b & c"));
    assert_eq!(model.edited_content(), "a &lt; b &amp; c");
}

#[test]
fn test_newline_becomes_line_break() {
    let mut model = loaded_model("ab", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::SetCaret(1)));
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));
    assert_eq!(model.edited_content(), "a<br>b");
}

#[test]
fn test_backspace_removes_whole_entity() {
    let mut model = loaded_model("", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::insert_text("x&y"));
    backspace(&mut model);
    backspace(&mut model);
    assert_eq!(model.edited_content(), "x");
}

#[test]
fn test_clearing_whole_document_is_dirty() {
    let mut model = loaded_model("abc", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::Select { start: 0, end: 3 }));
    backspace(&mut model);
    exit_edit(&mut model);

    let doc = model.document().unwrap();
    assert_eq!(surface_text(&model), "");
    assert_eq!(doc.edited_content(), "");
    assert_eq!(doc.original_html(), "abc");
    assert!(doc.is_dirty());
}

#[test]
fn test_delete_forward_removes_line_break() {
    let mut model = loaded_model("a<br>b", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::SetCaret(1)));
    update(&mut model, Msg::Document(DocumentMsg::DeleteForward));
    assert_eq!(model.edited_content(), "ab");
}

#[test]
fn test_backspace_at_start_changes_nothing() {
    let mut model = loaded_model("abc", &[]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::MoveCaretToStart));
    let cmd = update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
    assert!(cmd.is_none());
    assert_eq!(surface_text(&model), "abc");
}

#[test]
fn test_caret_moves_only_in_edit_mode() {
    let mut model = loaded_model("abc", &[]);
    update(&mut model, Msg::Editor(EditorMsg::MoveCaretToEnd));
    assert_eq!(model.document().unwrap().surface().caret(), 0);

    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::MoveCaretToEnd));
    assert_eq!(model.document().unwrap().surface().caret(), 3);
}

#[test]
fn test_edit_after_marker_shifts_it() {
    let mut model = test_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    enter_edit(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::MoveCaretToStart));
    type_chars(&mut model, ">> ");

    let surface = model.document().unwrap().surface();
    let marker = surface.find_marker("NOME_COMPRADOR").unwrap();
    assert_eq!(
        surface.slice(marker.range.clone()),
        "[[NOME_COMPRADOR NÃO ENCONTRADO]]"
    );
}

// ========================================================================
// Reset
// ========================================================================

#[test]
fn test_reset_returns_to_empty_view() {
    let mut model = loaded_model(COMPRADOR_HTML, &["NOME_COMPRADOR"]);
    enter_edit(&mut model);
    update(&mut model, Msg::Session(SessionMsg::Reset));

    assert_eq!(model.session.mode, EditMode::View);
    assert!(model.document().is_none());
    assert_eq!(model.edited_content(), "");
}
