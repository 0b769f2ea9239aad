//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! navigation, listener and token state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug,tokens=debug` - scoped filtering
//! - `RUST_LOG=minuta::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/minuta/logs/minuta.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::ops::Range;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, EditMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. Console lines go
/// to stderr so they never mix with the rendered review on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "minuta.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of review session state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: EditMode,
    pub outstanding: Vec<String>,
    pub marker_count: usize,
    pub selection: Range<usize>,
    pub pending: Option<String>,
    pub content_len: usize,
}

impl SessionSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let (marker_count, selection, content_len) = match model.document() {
            Some(doc) => (
                doc.surface().markers().len(),
                doc.surface().selection().range(),
                doc.edited_content().len(),
            ),
            None => (0, 0..0, 0),
        };
        Self {
            mode: model.session.mode,
            outstanding: model.outstanding_tokens(),
            marker_count,
            selection,
            pending: model.session.pending_token().map(str::to_string),
            content_len,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.outstanding != other.outstanding {
            let resolved: Vec<&str> = self
                .outstanding
                .iter()
                .filter(|name| !other.outstanding.contains(name))
                .map(String::as_str)
                .collect();
            if resolved.is_empty() {
                changes.push(format!(
                    "outstanding: {} → {}",
                    self.outstanding.len(),
                    other.outstanding.len()
                ));
            } else {
                changes.push(format!("resolved: {}", resolved.join(", ")));
            }
        }
        if self.marker_count != other.marker_count {
            changes.push(format!(
                "markers: {} → {}",
                self.marker_count, other.marker_count
            ));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {:?} → {:?}",
                self.selection, other.selection
            ));
        }
        if self.pending != other.pending {
            let status = match &other.pending {
                Some(token) => format!("listening for {}", token),
                None => "no listener".to_string(),
            };
            changes.push(status);
        }
        if self.content_len != other.content_len {
            changes.push(format!(
                "content: {} → {} bytes",
                self.content_len, other.content_len
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReviewConfig;
    use crate::model::Document;

    fn model_with(html: &str, tokens: &[&str]) -> AppModel {
        let mut model = AppModel::new(ReviewConfig::default());
        model.document = Some(Document::new(html, tokens));
        model
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = model_with("<p>[[NOME NÃO ENCONTRADO]]</p>", &["NOME"]);
        let a = SessionSnapshot::from_model(&model);
        let b = SessionSnapshot::from_model(&model);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_diff_reports_mode_and_listener() {
        let mut model = model_with("<p>[[NOME NÃO ENCONTRADO]]</p>", &["NOME"]);
        let before = SessionSnapshot::from_model(&model);
        model.session.mode = EditMode::Edit;
        model.session.subscribe_next_keystroke("NOME");
        let after = SessionSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("mode: View → Edit"));
        assert!(diff.contains("listening for NOME"));
    }

    #[test]
    fn test_diff_names_resolved_tokens() {
        let mut model = model_with(
            "<p>[[NOME NÃO ENCONTRADO]] [[CPF NÃO ENCONTRADO]]</p>",
            &["NOME", "CPF"],
        );
        let before = SessionSnapshot::from_model(&model);
        model.document_mut().unwrap().tokens_mut().resolve("CPF");
        let after = SessionSnapshot::from_model(&model);

        assert_eq!(before.diff(&after).as_deref(), Some("resolved: CPF"));
    }

    #[test]
    fn test_empty_model_snapshot() {
        let model = AppModel::default();
        let snap = SessionSnapshot::from_model(&model);
        assert_eq!(snap.mode, EditMode::View);
        assert!(snap.outstanding.is_empty());
        assert_eq!(snap.selection, 0..0);
    }
}
