//! App message handlers (generation round trip)

use crate::commands::Cmd;
use crate::messages::{AppMsg, SessionMsg};
use crate::model::AppModel;

use super::session::update_session;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Generate { source, options } => {
            if model.ui.is_generating {
                tracing::debug!("generation already in flight, ignoring request");
                return None;
            }
            model.ui.is_generating = true;
            model.ui.set_status("Gerando minuta...");
            Some(Cmd::batch(vec![
                Cmd::Generate { source, options },
                Cmd::Redraw,
            ]))
        }

        AppMsg::GenerationCompleted(result) => {
            model.ui.is_generating = false;
            match result {
                Ok(result) => update_session(model, SessionMsg::Load(result)),
                Err(e) => {
                    tracing::warn!("generation failed: {}", e);
                    let duration = model.config.error_notification_duration();
                    model
                        .ui
                        .notify_error("Erro ao gerar minuta. Tente novamente.", duration);
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::Quit => {
            // Handled by the runtime loop
            None
        }
    }
}
