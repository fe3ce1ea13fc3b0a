//! Application model - the complete state of the playground
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod editor_id;
pub mod error;
pub mod layout;
pub mod mosaic;
pub mod prompt;
pub mod ui;

pub use editor_id::{
    empty_content, is_plain_file_name, is_supported_file, EditorId, EditorKind, DEFAULT_EDITORS,
    MAIN_JS,
};
pub use error::MosaicError;
pub use layout::{
    canonical_arrangement, LayoutView, MosaicNode, Panel, Rect, SplitContainer, SplitDirection,
    SplitterBar, SPLITTER_WIDTH,
};
pub use mosaic::{EditorEntry, EditorMosaic, EditorState, MosaicEvent, Subscription};
pub use prompt::{prompt_channel, PromptHandle, PromptResolver, PromptResult};
pub use ui::{DialogKind, DialogOptions, DialogState, MenuState, UiState};

use std::path::PathBuf;

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Editors, their visibility and the panel layout
    pub mosaic: EditorMosaic,
    /// UI state (menu, dialogs, status)
    pub ui: UiState,
    /// Persisted configuration
    pub config: EditorConfig,
    /// Folder the current fiddle was loaded from or saved to
    pub project_path: Option<PathBuf>,
    /// Window dimensions
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a model holding the configured template
    pub fn new(config: EditorConfig) -> Self {
        let mosaic = EditorMosaic::with_values(
            config.template_values(),
            config.layout_direction,
            config.hide_empty_on_load,
        );

        Self {
            mosaic,
            ui: UiState::with_status("New fiddle"),
            config,
            project_path: None,
            window_size: (800, 600),
        }
    }

    /// Panel rects for the current window size
    pub fn layout_view(&self) -> LayoutView {
        let (width, height) = self.window_size;
        self.mosaic
            .compute_layout(Rect::new(0.0, 0.0, width as f32, height as f32))
    }

    /// Short name of the current project for titles and status messages
    pub fn project_name(&self) -> String {
        self.project_path
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
