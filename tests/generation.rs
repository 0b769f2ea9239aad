//! Generation round trip tests - local generator and completion handling

mod common;

use std::path::Path;

use common::{outstanding, COMPRADOR_HTML};
use minuta::commands::Cmd;
use minuta::generation::{DocumentGenerator, GenerationError, GenerationOptions, LocalGenerator};
use minuta::messages::{AppMsg, Msg};
use minuta::model::NoticeKind;
use minuta::update::update;
use minuta::AppModel;

#[test]
fn test_generate_request_marks_busy() {
    let mut model = AppModel::default();
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::Generate {
            source: "resposta.json".into(),
            options: GenerationOptions::default(),
        }),
    );

    assert!(model.ui.is_generating);
    assert!(matches!(cmd, Some(Cmd::Batch(ref cmds)) if matches!(cmds[0], Cmd::Generate { .. })));
}

#[test]
fn test_second_generate_while_busy_is_ignored() {
    let mut model = AppModel::default();
    let generate = || {
        Msg::App(AppMsg::Generate {
            source: "resposta.json".into(),
            options: GenerationOptions::default(),
        })
    };
    update(&mut model, generate());
    assert!(update(&mut model, generate()).is_none());
}

#[test]
fn test_failed_generation_keeps_no_document() {
    let mut model = AppModel::default();
    update(
        &mut model,
        Msg::App(AppMsg::GenerationCompleted(Err("timeout".to_string()))),
    );

    assert!(model.document().is_none());
    assert!(!model.ui.is_generating);
    let message = model.ui.transient_message.as_ref().unwrap();
    assert_eq!(message.kind, NoticeKind::Error);
    assert_eq!(message.text, "Erro ao gerar minuta. Tente novamente.");
}

#[test]
fn test_json_response_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resposta.json");
    std::fs::write(
        &path,
        r#"{"html": "Comprador: [[NOME_COMPRADOR NÃO ENCONTRADO]]", "unresolvedTokens": ["NOME_COMPRADOR"]}"#,
    )
    .unwrap();

    let result = LocalGenerator
        .generate(&path, &GenerationOptions::default())
        .unwrap();

    let mut model = AppModel::default();
    update(
        &mut model,
        Msg::App(AppMsg::GenerationCompleted(Ok(result))),
    );

    assert_eq!(model.document().unwrap().original_html(), COMPRADOR_HTML);
    assert_eq!(outstanding(&model), ["NOME_COMPRADOR"]);
}

#[test]
fn test_html_draft_discovers_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minuta.html");
    std::fs::write(&path, COMPRADOR_HTML).unwrap();

    let result = LocalGenerator
        .generate(&path, &GenerationOptions::default())
        .unwrap();
    assert_eq!(result.unresolved_tokens, ["NOME_COMPRADOR"]);
}

#[test]
fn test_unsupported_source() {
    let err = LocalGenerator
        .generate(Path::new("escritura.pdf"), &GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(err, GenerationError::Unsupported(_)));
}
