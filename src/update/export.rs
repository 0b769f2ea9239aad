//! Copy and export handlers

use crate::commands::Cmd;
use crate::messages::ExportMsg;
use crate::model::AppModel;

/// Handle export messages
///
/// Copy and download are disabled while editing: the request is dropped
/// without a notification. Leave edit mode first to flush the surface.
pub fn update_export(model: &mut AppModel, msg: ExportMsg) -> Option<Cmd> {
    match msg {
        ExportMsg::CopyToClipboard => {
            let content = exportable_content(model)?;
            Some(Cmd::CopyToClipboard { content })
        }

        ExportMsg::DownloadAsFile => {
            let content = exportable_content(model)?;
            let path = model.config.export_path();
            Some(Cmd::WriteExport { path, content })
        }

        ExportMsg::CopyCompleted(result) => {
            match result {
                Ok(()) => {
                    let duration = model.config.notification_duration();
                    model.ui.notify("Conteúdo copiado!", duration);
                }
                Err(e) => {
                    tracing::warn!(target: "export", "clipboard write failed: {}", e);
                    let duration = model.config.error_notification_duration();
                    model
                        .ui
                        .notify_error(format!("Não foi possível copiar: {}", e), duration);
                }
            }
            Some(Cmd::Redraw)
        }

        ExportMsg::DownloadCompleted(result) => {
            match result {
                Ok(path) => {
                    tracing::debug!(target: "export", path = %path.display(), "download finished");
                    let duration = model.config.notification_duration();
                    model.ui.notify("Minuta exportada com sucesso!", duration);
                }
                Err(e) => {
                    tracing::warn!(target: "export", "export failed: {}", e);
                    let duration = model.config.error_notification_duration();
                    model
                        .ui
                        .notify_error(format!("Não foi possível exportar a minuta: {}", e), duration);
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Content to copy or export, or None when exporting is not possible
fn exportable_content(model: &AppModel) -> Option<String> {
    if model.session.is_editing() {
        tracing::debug!(target: "export", "export disabled while editing");
        return None;
    }
    let content = model.document()?.export_content();
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}
