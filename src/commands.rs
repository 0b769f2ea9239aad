//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::generation::GenerationOptions;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the view
    Redraw,
    /// Run the generation collaborator in the background
    /// Sends Msg::App(GenerationCompleted) when done
    Generate {
        source: PathBuf,
        options: GenerationOptions,
    },
    /// Write content to the system clipboard
    /// Sends Msg::Export(CopyCompleted) when done
    CopyToClipboard { content: String },
    /// Write the exported draft to disk
    /// Sends Msg::Export(DownloadCompleted) when done
    WriteExport { path: PathBuf, content: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Generate { .. } | Cmd::CopyToClipboard { .. } | Cmd::WriteExport { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
