//! Export side effects - clipboard and file download
//!
//! These run on the runtime's worker threads; their outcome comes back to the
//! model as an `ExportMsg` completion and is only ever shown as a notification.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write content to the system clipboard
pub fn write_clipboard(content: &str) -> Result<(), ExportError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| ExportError::Clipboard(e.to_string()))
}

/// Write the draft to `path`, creating the parent directory if needed
pub fn write_file(path: &Path, content: &str) -> Result<PathBuf, ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)?;

    tracing::info!(target: "export", path = %path.display(), bytes = content.len(), "draft exported");
    Ok(path.to_path_buf())
}
