//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::ipc::IpcEventKind;
use crate::model::EditorId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // File dialogs
    /// Show the native "Open Fiddle" folder picker
    ShowOpenProjectDialog,
    /// Show the native "Save Fiddle" folder picker
    ShowSaveProjectDialog {
        /// Event kind sent when a folder is chosen
        intent: IpcEventKind,
        /// Shown in the title as "Save Fiddle as {label}"
        as_label: Option<String>,
    },

    // Project I/O
    /// Read a project folder in the background
    LoadProject { path: PathBuf },
    /// Write editors into a project folder in the background
    SaveProject {
        path: PathBuf,
        values: BTreeMap<EditorId, String>,
    },
}

impl Cmd {
    /// Whether this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => true,
        }
    }

    /// Combine two optional commands
    pub fn and(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, other) | (other, None) => other,
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}
