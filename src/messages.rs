//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::generation::{GenerationOptions, GenerationResult};

/// Direction for caret movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Session lifecycle messages (document load/reset)
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// Replace the current document with a freshly generated one
    Load(GenerationResult),
    /// Discard the document and start over ("GERAR NOVA MINUTA")
    Reset,
}

/// Editable surface controller and navigation messages
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// VIEW -> EDIT
    EnterEdit,
    /// EDIT -> VIEW, flushing the surface into the canonical content
    ExitEdit,
    /// Edit button: enter or leave edit mode
    ToggleEdit,
    /// Jump to the marker of a token and select it
    FocusToken(String),
    /// Move caret one char
    MoveCaret(Direction),
    /// Move caret to start of document
    MoveCaretToStart,
    /// Move caret to end of document
    MoveCaretToEnd,
    /// Place caret at a char offset (from a click)
    SetCaret(usize),
    /// Select a char range (from a drag)
    Select { start: usize, end: usize },
}

/// Edit keystrokes on the surface
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert text at the caret (paste, composed input)
    InsertText(String),
    /// Insert a line break at the caret
    InsertNewline,
    /// Delete before the caret (Backspace)
    DeleteBackward,
    /// Delete after the caret (Delete)
    DeleteForward,
}

/// Copy/export messages
#[derive(Debug, Clone)]
pub enum ExportMsg {
    /// Copy the canonical content to the clipboard
    CopyToClipboard,
    /// Save the canonical content as `minuta.html`
    DownloadAsFile,
    /// Clipboard write finished (async result)
    CopyCompleted(Result<(), String>),
    /// File write finished (async result)
    DownloadCompleted(Result<PathBuf, String>),
}

/// UI-specific messages (notifications)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Periodic tick: expire stale notifications
    Tick,
}

/// Application-level messages (generation round trip)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Request a draft for a source document
    Generate {
        source: PathBuf,
        options: GenerationOptions,
    },
    /// Generation finished (async result)
    GenerationCompleted(Result<GenerationResult, String>),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document lifecycle
    Session(SessionMsg),
    /// Edit mode, navigation, caret
    Editor(EditorMsg),
    /// Edit keystrokes
    Document(DocumentMsg),
    /// Copy and export
    Export(ExportMsg),
    /// UI messages (status, notifications)
    Ui(UiMsg),
    /// App messages (generation, quit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a focus-token message
    pub fn focus_token(name: impl Into<String>) -> Self {
        Msg::Editor(EditorMsg::FocusToken(name.into()))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create an insert text message
    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    /// Create a load message
    pub fn load(result: GenerationResult) -> Self {
        Msg::Session(SessionMsg::Load(result))
    }
}
