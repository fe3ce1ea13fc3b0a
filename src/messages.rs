//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::ipc::IpcEventKind;
use crate::model::{EditorId, MosaicNode};

/// Editor mosaic messages (registry and layout)
#[derive(Debug, Clone)]
pub enum MosaicMsg {
    /// Add an editor with the given content
    Add { id: EditorId, content: String },
    /// Remove an editor
    Remove(EditorId),
    /// Show or hide an editor
    Toggle(EditorId),
    /// Replace an editor's content (from the editing surface)
    SetContent { id: EditorId, content: String },
    /// Tile the visible editors canonically
    ResetLayout,
    /// The user rearranged the panels
    SetLayout(MosaicNode),
    /// The user dragged a splitter
    ResizeSplit { path: Vec<usize>, ratios: Vec<f32> },
}

/// Editors dropdown messages
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Trigger button clicked (open if closed, close if open)
    Toggle,
    /// Click outside or Escape
    Dismiss,
    /// Editor item clicked
    ToggleItem(EditorId),
    /// Nested "Remove" clicked
    RemoveEditor(EditorId),
    /// "Add Editor" clicked
    AddEditor,
    /// "Reset Layout" clicked
    ResetLayout,
}

/// Generic dialog messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMsg {
    /// Input text changed
    SetInput(String),
    /// OK button
    Confirm,
    /// Cancel button, Escape, or dismissing a warning
    Cancel,
}

/// App messages (project files, window)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Show the "Open Fiddle" dialog
    ShowOpenDialog,
    /// Show the "Save Fiddle" dialog
    ShowSaveDialog { intent: IpcEventKind, as_label: Option<String> },
    /// Save to the current project folder, asking for one if there is none
    Save,
    /// Load the fiddle in this folder (usually from an IPC open request)
    OpenProject(PathBuf),
    /// Write the fiddle into this folder (usually from an IPC save request)
    SaveProject(PathBuf),
    /// Project folder read finished
    ProjectLoaded {
        path: PathBuf,
        result: Result<Vec<(EditorId, String)>, String>,
    },
    /// Project folder write finished
    ProjectSaved {
        path: PathBuf,
        result: Result<(), String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Registry and layout
    Mosaic(MosaicMsg),
    /// Editors dropdown
    Menu(MenuMsg),
    /// Generic dialog
    Dialog(DialogMsg),
    /// Project files and window
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn toggle(id: impl Into<EditorId>) -> Self {
        Msg::Mosaic(MosaicMsg::Toggle(id.into()))
    }

    pub fn menu(msg: MenuMsg) -> Self {
        Msg::Menu(msg)
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
