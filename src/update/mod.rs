//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod dialog;
mod menu;
mod mosaic;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::{AppModel, DialogOptions, MosaicError};

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use dialog::update_dialog;
pub use menu::{add_editor_from_filename, update_menu};
pub use mosaic::update_mosaic;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Mosaic(m) => update_mosaic(model, m),
        Msg::Menu(m) => update_menu(model, m),
        Msg::Dialog(m) => update_dialog(model, m),
        Msg::App(m) => update_app(model, m),
    };

    // A dialog may have closed: hand its answer to whoever is waiting
    let resolved = menu::resolve_pending_prompts(model);

    Cmd::and(result, resolved)
}

/// Update with a debug span and an invariant check around each message
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = model.mosaic.layout_revision();
    let result = update_inner(model, msg);

    let after = model.mosaic.layout_revision();
    if after != before {
        debug!(
            target: "mosaic",
            panels = model.mosaic.mosaic_leaf_count(),
            revision = after,
            "layout recomputed"
        );
    }
    model.mosaic.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Mosaic::Toggle(EditorId("main.js"))`
/// - `Menu::AddEditor`
/// - `App::ProjectLoaded(/path/to/fiddle)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Mosaic(m) => format!("Mosaic::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Dialog(m) => format!("Dialog::{:?}", m),
        // Skip file contents
        Msg::App(AppMsg::ProjectLoaded { path, .. }) => {
            format!("App::ProjectLoaded({})", path.display())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}

/// Surface a registry error as a dismissible warning
pub(crate) fn show_error(model: &mut AppModel, error: &MosaicError) {
    tracing::warn!(target: "mosaic", %error, "operation failed");
    model.ui.show_dialog(DialogOptions::warning(error.user_message()));
}
