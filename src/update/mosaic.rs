//! Mosaic message handlers (registry and layout)

use crate::commands::Cmd;
use crate::messages::MosaicMsg;
use crate::model::AppModel;

use super::show_error;

/// Handle mosaic messages. Failures become warning dialogs.
pub fn update_mosaic(model: &mut AppModel, msg: MosaicMsg) -> Option<Cmd> {
    let result = match msg {
        MosaicMsg::Add { id, content } => model.mosaic.add(id, content),
        MosaicMsg::Remove(id) => model.mosaic.remove(&id),
        MosaicMsg::Toggle(id) => model.mosaic.toggle(&id).map(|_| ()),
        MosaicMsg::SetContent { id, content } => model.mosaic.set_content(&id, content),
        MosaicMsg::ResetLayout => {
            model.mosaic.reset_layout();
            Ok(())
        }
        MosaicMsg::SetLayout(layout) => model.mosaic.set_layout(layout),
        MosaicMsg::ResizeSplit { path, ratios } => model.mosaic.resize_split(&path, ratios),
    };

    if let Err(error) = result {
        show_error(model, &error);
    }
    Some(Cmd::Redraw)
}
