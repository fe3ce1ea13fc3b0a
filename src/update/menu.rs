//! Editors dropdown message handlers
//!
//! The dropdown is the recovery boundary for registry errors: each one ends up in a
//! warning dialog instead of propagating further.

use crate::commands::Cmd;
use crate::messages::MenuMsg;
use crate::model::{
    empty_content, is_plain_file_name, AppModel, DialogOptions, EditorId, EditorKind, MenuState, MosaicError,
};

use super::show_error;

/// Handle dropdown messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match msg {
        MenuMsg::Toggle => {
            model.ui.menu = match model.ui.menu {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            };
            Some(Cmd::Redraw)
        }

        MenuMsg::Dismiss => {
            model.ui.menu = MenuState::Closed;
            Some(Cmd::Redraw)
        }

        MenuMsg::ToggleItem(id) => {
            model.ui.menu = MenuState::Closed;

            // Mirrors the disabled item: the last visible panel is never offered
            let visible = model.mosaic.state(&id).is_some_and(|s| s.is_visible());
            if visible && model.mosaic.layout().leaf_count() < 2 {
                tracing::debug!(target: "menu", %id, "ignoring click on locked item");
                return Some(Cmd::Redraw);
            }

            if let Err(error) = model.mosaic.toggle(&id) {
                show_error(model, &error);
            }
            Some(Cmd::Redraw)
        }

        MenuMsg::RemoveEditor(id) => {
            model.ui.menu = MenuState::Closed;
            if let Err(error) = model.mosaic.remove(&id) {
                show_error(model, &error);
            }
            Some(Cmd::Redraw)
        }

        MenuMsg::AddEditor => {
            model.ui.menu = MenuState::Closed;
            let handle = model.ui.open_prompt(DialogOptions::add_editor_prompt());
            model.ui.pending_add_editor = Some(handle);
            Some(Cmd::Redraw)
        }

        MenuMsg::ResetLayout => {
            model.ui.menu = MenuState::Closed;
            model.mosaic.reset_layout();
            Some(Cmd::Redraw)
        }
    }
}

/// Act on answers to prompts that closed during this update
pub(super) fn resolve_pending_prompts(model: &mut AppModel) -> Option<Cmd> {
    let result = model.ui.take_add_editor_result()?;

    match result.accepted_value() {
        Some(filename) => {
            let filename = filename.to_string();
            if let Err(error) = add_editor_from_filename(model, &filename) {
                show_error(model, &error);
            }
        }
        None => tracing::debug!(target: "menu", "add editor cancelled"),
    }
    Some(Cmd::Redraw)
}

/// Add an editor for `filename` with placeholder content for its kind
pub fn add_editor_from_filename(model: &mut AppModel, filename: &str) -> Result<(), MosaicError> {
    if !is_plain_file_name(filename) {
        return Err(MosaicError::InvalidFileName(filename.to_string()));
    }
    let kind = EditorKind::from_filename(filename)
        .ok_or_else(|| MosaicError::UnsupportedFileKind(filename.to_string()))?;

    let id = EditorId::new(filename);
    let content = empty_content(&id);
    model.mosaic.add(id, content)?;

    tracing::info!(target: "menu", filename, ?kind, "added editor");
    model.ui.set_status(format!("Added {}", filename));
    Ok(())
}
