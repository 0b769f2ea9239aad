//! UI message handlers

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick => model.ui.expire_transient().then_some(Cmd::Redraw),
    }
}
