//! Document lifecycle handlers

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::{AppModel, Document};

/// Handle session messages (load, reset)
pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Load(result) => {
            // Detach anything still bound to the previous document first
            model.reset();

            let document = Document::from_generation(result);
            let outstanding = document.tokens().outstanding_count();
            model.document = Some(document);

            if outstanding > 0 {
                model.ui.set_status(format!(
                    "Atenção: {} dado(s) não encontrado(s). Complete os campos destacados.",
                    outstanding
                ));
            } else {
                model.ui.set_status("Revise sua minuta");
            }
            Some(Cmd::Redraw)
        }

        SessionMsg::Reset => {
            model.reset();
            model
                .ui
                .set_status("Selecione um arquivo e gere sua minuta");
            tracing::debug!(target: "session", "session reset");
            Some(Cmd::Redraw)
        }
    }
}
