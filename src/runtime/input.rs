//! Line input handling
//!
//! Every line read from the terminal is either a `:command` or text typed at
//! the caret. Commands map one-to-one onto messages; a few (`:show`, `:html`,
//! `:help`, `:quit`) are handled by the runtime itself.
//!
//! A line starting with `::` types its text with the first colon removed.

use std::path::PathBuf;

use minuta::generation::GenerationOptions;
use minuta::messages::{
    AppMsg, Direction, DocumentMsg, EditorMsg, ExportMsg, Msg, SessionMsg,
};

pub const HELP: &str = "\
Comandos:
  :open ARQUIVO     gerar a minuta a partir de um .json ou .html
  :edit / :done     entrar / sair do modo de edição (:toggle alterna)
  :focus NOME       ir até o campo NOME e selecioná-lo
  :left :right      mover o cursor
  :home :end        início / fim do documento
  :caret N          posicionar o cursor
  :select A B       selecionar o intervalo A..B
  :bs :del :nl      apagar antes / depois, quebra de linha
  :copy :export     copiar / exportar minuta.html
  :new              gerar nova minuta (descarta a atual)
  :show :html       redesenhar / mostrar o HTML destacado
  :quit             sair
Qualquer outra linha é digitada no cursor.";

/// What a line of input asks for
#[derive(Debug, Clone)]
pub enum Input {
    /// Run a message through the update loop
    Msg(Msg),
    /// Redraw the review card
    Show,
    /// Print the highlighted HTML
    Html,
    Help,
    Quit,
}

/// Map a line of input to an action. Empty lines are ignored.
pub fn parse_line(line: &str, options: GenerationOptions) -> Option<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return None;
    }

    if let Some(text) = line.strip_prefix("::") {
        return Some(Input::Msg(Msg::insert_text(format!(":{}", text))));
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(Input::Msg(Msg::insert_text(line)));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    let msg = match name {
        "open" if !arg.is_empty() => Msg::App(AppMsg::Generate {
            source: PathBuf::from(arg),
            options,
        }),
        "edit" => Msg::Editor(EditorMsg::EnterEdit),
        "done" => Msg::Editor(EditorMsg::ExitEdit),
        "toggle" => Msg::Editor(EditorMsg::ToggleEdit),
        "focus" if !arg.is_empty() => Msg::focus_token(arg),
        "left" => Msg::Editor(EditorMsg::MoveCaret(Direction::Left)),
        "right" => Msg::Editor(EditorMsg::MoveCaret(Direction::Right)),
        "home" => Msg::Editor(EditorMsg::MoveCaretToStart),
        "end" => Msg::Editor(EditorMsg::MoveCaretToEnd),
        "caret" => match arg.parse() {
            Ok(offset) => Msg::Editor(EditorMsg::SetCaret(offset)),
            Err(_) => return Some(Input::Help),
        },
        "select" => match parse_range(arg) {
            Some((start, end)) => Msg::Editor(EditorMsg::Select { start, end }),
            None => return Some(Input::Help),
        },
        "bs" => Msg::Document(DocumentMsg::DeleteBackward),
        "del" => Msg::Document(DocumentMsg::DeleteForward),
        "nl" => Msg::Document(DocumentMsg::InsertNewline),
        "copy" => Msg::Export(ExportMsg::CopyToClipboard),
        "export" => Msg::Export(ExportMsg::DownloadAsFile),
        "new" => Msg::Session(SessionMsg::Reset),
        "tokens" | "show" => return Some(Input::Show),
        "html" => return Some(Input::Html),
        "quit" | "q" => return Some(Input::Quit),
        "help" | "h" => return Some(Input::Help),
        other => {
            tracing::debug!(command = %other, "unknown command");
            return Some(Input::Help);
        }
    };

    Some(Input::Msg(msg))
}

fn parse_range(arg: &str) -> Option<(usize, usize)> {
    let mut parts = arg.split_whitespace();
    let start = parts.next()?.parse().ok()?;
    let end = parts.next()?.parse().ok()?;
    Some((start, end))
}
