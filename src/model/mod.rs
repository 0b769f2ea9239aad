//! Application model - the complete state of a review session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod selection;
pub mod session;
pub mod surface;
pub mod ui;

pub use document::{Document, TokenSet, UnresolvedToken};
pub use selection::Selection;
pub use session::{EditMode, EditSession, ListenerId};
pub use surface::{MarkerId, MarkerSpan, Surface};
pub use ui::{NoticeKind, TransientMessage, UiState};

use crate::config::ReviewConfig;

/// The complete application model
#[derive(Debug, Default)]
pub struct AppModel {
    /// Draft under review (None until a generation succeeds)
    pub document: Option<Document>,
    /// Edit mode and pending token resolution
    pub session: EditSession,
    /// Status line and notifications
    pub ui: UiState,
    /// Persisted configuration
    pub config: ReviewConfig,
}

impl AppModel {
    pub fn new(config: ReviewConfig) -> Self {
        Self {
            document: None,
            session: EditSession::new(),
            ui: UiState::with_status("Selecione um arquivo e gere sua minuta"),
            config,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut Document> {
        self.document.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// Outstanding token names of the current document
    pub fn outstanding_tokens(&self) -> Vec<String> {
        self.document
            .as_ref()
            .map(|doc| doc.tokens().outstanding_names())
            .unwrap_or_default()
    }

    /// Canonical content of the current document
    pub fn edited_content(&self) -> &str {
        self.document
            .as_ref()
            .map(Document::edited_content)
            .unwrap_or("")
    }

    /// Drop the document and return to an empty VIEW session
    pub fn reset(&mut self) {
        self.session.reset();
        self.document = None;
        self.ui.clear_transient();
    }
}
