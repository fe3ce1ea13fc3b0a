//! Generic dialog message handlers

use crate::commands::Cmd;
use crate::messages::DialogMsg;
use crate::model::AppModel;

/// Handle dialog messages. Closing a dialog resolves its prompt, if any.
pub fn update_dialog(model: &mut AppModel, msg: DialogMsg) -> Option<Cmd> {
    if !model.ui.has_dialog() {
        return None;
    }

    match msg {
        DialogMsg::SetInput(text) => model.ui.set_dialog_input(text),
        DialogMsg::Confirm => model.ui.confirm_dialog(),
        DialogMsg::Cancel => model.ui.cancel_dialog(),
    }
    Some(Cmd::Redraw)
}
