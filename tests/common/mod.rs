//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use minuta::config::ReviewConfig;
use minuta::generation::GenerationResult;
use minuta::messages::{DocumentMsg, EditorMsg, Msg};
use minuta::model::{AppModel, Document};
use minuta::update::update;

/// Draft with a single missing buyer name
pub const COMPRADOR_HTML: &str = "Comprador: [[NOME_COMPRADOR NÃO ENCONTRADO]]";

/// Draft with three missing fields, one of them repeated
pub const ESCRITURA_HTML: &str = "<h1>Escritura de Compra e Venda</h1>\
<p>Vendedor: [[NOME_VENDEDOR NÃO ENCONTRADO]], CPF [[CPF_VENDEDOR NÃO ENCONTRADO]].</p>\
<p>Comprador: [[NOME_COMPRADOR NÃO ENCONTRADO]].</p>\
<p>Assina o vendedor [[NOME_VENDEDOR NÃO ENCONTRADO]].</p>";

pub const ESCRITURA_TOKENS: [&str; 3] = ["NOME_VENDEDOR", "CPF_VENDEDOR", "NOME_COMPRADOR"];

/// Create a test model with a document built directly (VIEW mode)
pub fn test_model(html: &str, tokens: &[&str]) -> AppModel {
    let mut model = AppModel::new(ReviewConfig::default());
    model.document = Some(Document::new(html, tokens));
    model
}

/// Create a test model loaded through the update loop, as after generation
pub fn loaded_model(html: &str, tokens: &[&str]) -> AppModel {
    let mut model = AppModel::new(ReviewConfig::default());
    let result = GenerationResult::new(html, tokens.iter().map(|t| t.to_string()).collect());
    update(&mut model, Msg::load(result));
    model
}

/// Type `text` one keystroke at a time
pub fn type_chars(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::insert_char(ch));
    }
}

pub fn focus(model: &mut AppModel, name: &str) {
    update(model, Msg::focus_token(name));
}

pub fn enter_edit(model: &mut AppModel) {
    update(model, Msg::Editor(EditorMsg::EnterEdit));
}

pub fn exit_edit(model: &mut AppModel) {
    update(model, Msg::Editor(EditorMsg::ExitEdit));
}

pub fn backspace(model: &mut AppModel) {
    update(model, Msg::Document(DocumentMsg::DeleteBackward));
}

/// Outstanding token names of the current document
pub fn outstanding(model: &AppModel) -> Vec<String> {
    model.outstanding_tokens()
}

/// Current surface text
pub fn surface_text(model: &AppModel) -> String {
    model
        .document()
        .map(|d| d.surface().serialize())
        .unwrap_or_default()
}
