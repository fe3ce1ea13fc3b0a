//! UI state - panel menu, generic dialog and status message

use super::prompt::{prompt_channel, PromptHandle, PromptResolver, PromptResult};

// ============================================================================
// Panel Menu
// ============================================================================

/// Open/closed state of the editors dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

// ============================================================================
// Generic Dialog
// ============================================================================

/// Flavour of the generic dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Warning,
}

/// What the generic dialog shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub kind: DialogKind,
    pub label: String,
    /// Show a text input
    pub wants_input: bool,
    pub ok: String,
    /// `None` hides the cancel button
    pub cancel: Option<String>,
    pub placeholder: Option<String>,
}

impl DialogOptions {
    /// The "Add Editor" filename prompt
    pub fn add_editor_prompt() -> Self {
        Self {
            kind: DialogKind::Confirm,
            label: "Enter a filename to add".to_string(),
            wants_input: true,
            ok: "Create".to_string(),
            cancel: Some("Cancel".to_string()),
            placeholder: Some("file.js".to_string()),
        }
    }

    /// A dismiss-only warning
    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Warning,
            label: label.into(),
            wants_input: false,
            ok: "Okay".to_string(),
            cancel: None,
            placeholder: None,
        }
    }
}

/// An open dialog and its pending answer
#[derive(Debug)]
pub struct DialogState {
    pub options: DialogOptions,
    /// Current input text
    pub input: String,
    resolver: Option<PromptResolver>,
}

impl DialogState {
    fn new(options: DialogOptions, resolver: Option<PromptResolver>) -> Self {
        Self {
            options,
            input: String::new(),
            resolver,
        }
    }

    /// Close with `result`, answering the prompt if one is waiting
    fn finish(mut self, result: PromptResult) {
        if let Some(resolver) = self.resolver.take() {
            resolver.resolve(result);
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state - menu, dialogs and status message
#[derive(Debug, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Editors dropdown
    pub menu: MenuState,
    /// Currently open dialog (if any)
    pub active_dialog: Option<DialogState>,
    /// Answer to the "Add Editor" prompt, once it closes
    pub pending_add_editor: Option<PromptHandle>,
    /// Whether a project folder is currently being loaded
    pub is_loading: bool,
    /// Whether a project folder is currently being saved
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog.is_some()
    }

    /// Open an input dialog; the handle resolves once when it closes.
    ///
    /// A dialog that was already open is cancelled first.
    pub fn open_prompt(&mut self, options: DialogOptions) -> PromptHandle {
        let (resolver, handle) = prompt_channel();
        self.replace_dialog(DialogState::new(options, Some(resolver)));
        handle
    }

    /// Open a dialog nobody waits on (warnings)
    pub fn show_dialog(&mut self, options: DialogOptions) {
        self.replace_dialog(DialogState::new(options, None));
    }

    fn replace_dialog(&mut self, dialog: DialogState) {
        if let Some(previous) = self.active_dialog.replace(dialog) {
            previous.finish(PromptResult::cancelled());
        }
    }

    /// Update the input text of the open dialog
    pub fn set_dialog_input(&mut self, input: impl Into<String>) {
        if let Some(dialog) = self.active_dialog.as_mut() {
            dialog.input = input.into();
        }
    }

    /// Close the dialog with its current input
    pub fn confirm_dialog(&mut self) {
        if let Some(dialog) = self.active_dialog.take() {
            let result = PromptResult::confirmed(dialog.input.clone());
            dialog.finish(result);
        }
    }

    /// Close the dialog without an answer
    pub fn cancel_dialog(&mut self) {
        if let Some(dialog) = self.active_dialog.take() {
            dialog.finish(PromptResult::cancelled());
        }
    }

    /// The "Add Editor" answer, once available. Yields at most once per prompt.
    pub fn take_add_editor_result(&mut self) -> Option<PromptResult> {
        let result = self.pending_add_editor.as_ref()?.try_result()?;
        self.pending_add_editor = None;
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_confirm_resolves_with_input() {
        let mut ui = UiState::new();
        let handle = ui.open_prompt(DialogOptions::add_editor_prompt());
        assert!(ui.has_dialog());
        assert_eq!(handle.try_result(), None);

        ui.set_dialog_input("tools.js");
        ui.confirm_dialog();

        assert!(!ui.has_dialog());
        assert_eq!(handle.try_result(), Some(PromptResult::confirmed("tools.js")));
    }

    #[test]
    fn test_replacing_dialog_cancels_previous_prompt() {
        let mut ui = UiState::new();
        let handle = ui.open_prompt(DialogOptions::add_editor_prompt());
        ui.show_dialog(DialogOptions::warning("boom"));

        assert_eq!(handle.try_result(), Some(PromptResult::cancelled()));
        assert_eq!(
            ui.active_dialog.as_ref().map(|d| d.options.kind),
            Some(DialogKind::Warning)
        );
    }

    #[test]
    fn test_pending_add_editor_yields_once() {
        let mut ui = UiState::new();
        ui.pending_add_editor = Some(ui.open_prompt(DialogOptions::add_editor_prompt()));
        assert_eq!(ui.take_add_editor_result(), None);

        ui.cancel_dialog();
        assert_eq!(ui.take_add_editor_result(), Some(PromptResult::cancelled()));
        assert_eq!(ui.take_add_editor_result(), None);
    }

    #[test]
    fn test_add_editor_prompt_labels() {
        let options = DialogOptions::add_editor_prompt();
        assert_eq!(options.placeholder.as_deref(), Some("file.js"));
        assert_eq!(options.ok, "Create");
        assert_eq!(options.cancel.as_deref(), Some("Cancel"));
        assert!(DialogOptions::warning("x").cancel.is_none());
    }
}
