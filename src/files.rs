//! Project folders and the open/save dialogs
//!
//! A fiddle is saved as a folder holding one file per editor. The dialog flow asks
//! the native dialog collaborator for a folder and forwards the choice over the IPC
//! channel; saving into a folder that already has code in it needs confirmation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::ipc::{IpcEvent, IpcEventKind, IpcSender};
use crate::model::{is_plain_file_name, is_supported_file, EditorId};

/// Accept button of the save folder picker
pub const SAVE_BUTTON_LABEL: &str = "Save here";

/// A yes/cancel question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub message: String,
    pub detail: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Native dialogs used by the open/save flow
pub trait FileDialogs {
    /// Ask for an existing folder to open
    fn pick_project_folder(&self, title: &str) -> Option<PathBuf>;

    /// Ask for a folder to save into (may be created by the user)
    fn pick_save_folder(&self, title: &str, button_label: &str) -> Option<PathBuf>;

    /// Ask a yes/cancel question. Returns true when confirmed.
    fn confirm(&self, message: &MessageBox) -> Result<bool>;
}

/// [`FileDialogs`] backed by the platform's dialogs
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn pick_project_folder(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_folder()
    }

    // rfd has no way to relabel the accept button of a folder picker
    fn pick_save_folder(&self, title: &str, _button_label: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_can_create_directories(true)
            .pick_folder()
    }

    fn confirm(&self, message: &MessageBox) -> Result<bool> {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(&message.message)
            .set_description(&message.detail)
            .set_buttons(rfd::MessageButtons::OkCancelCustom(
                message.confirm_label.clone(),
                message.cancel_label.clone(),
            ))
            .show();

        Ok(match result {
            rfd::MessageDialogResult::Ok | rfd::MessageDialogResult::Yes => true,
            rfd::MessageDialogResult::Custom(label) => label == message.confirm_label,
            _ => false,
        })
    }
}

// ============================================================================
// Dialog flow
// ============================================================================

/// Show the "Open Fiddle" dialog and forward the chosen folder
pub fn show_open_dialog(dialogs: &dyn FileDialogs, tx: &IpcSender) -> Option<PathBuf> {
    let path = dialogs.pick_project_folder("Open Fiddle")?;
    tracing::info!("Asked to open {}", path.display());
    tx.send(IpcEvent::new(IpcEventKind::OpenRequested, path.clone()));
    Some(path)
}

/// Show the "Save Fiddle" dialog and forward the chosen folder as `intent`.
///
/// Returns the folder if an event was sent. A failing overwrite confirmation is an
/// error: carrying on could overwrite the user's files.
pub fn show_save_dialog(
    dialogs: &dyn FileDialogs,
    tx: &IpcSender,
    intent: IpcEventKind,
    as_label: Option<&str>,
) -> Result<Option<PathBuf>> {
    let title = match as_label {
        Some(label) => format!("Save Fiddle as {}", label),
        None => "Save Fiddle".to_string(),
    };

    let Some(path) = dialogs.pick_save_folder(&title, SAVE_BUTTON_LABEL) else {
        return Ok(None);
    };
    tracing::info!("Asked to save to {}", path.display());

    if !is_ok_to_save_at(dialogs, &path)? {
        tracing::info!("Save to {} cancelled", path.display());
        return Ok(None);
    }

    tx.send(IpcEvent::new(intent, path.clone()));
    Ok(Some(path))
}

/// Confirm it's OK to save files in `folder`
pub fn is_ok_to_save_at(dialogs: &dyn FileDialogs, folder: &Path) -> Result<bool> {
    if !folder.exists() || supported_files_in(folder)?.is_empty() {
        return Ok(true);
    }
    confirm_file_overwrite(dialogs, folder)
}

fn confirm_file_overwrite(dialogs: &dyn FileDialogs, folder: &Path) -> Result<bool> {
    dialogs
        .confirm(&overwrite_message(folder))
        .with_context(|| format!("Failed to confirm saving into {}", folder.display()))
}

/// The question asked before saving into a folder with code in it
pub fn overwrite_message(folder: &Path) -> MessageBox {
    let basename = folder
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| folder.display().to_string());

    MessageBox {
        message: format!("Save files to {}?", basename),
        detail: format!(
            "The folder \"{}\" already has code in it.\n \nAre you sure you want to save here?",
            folder.display()
        ),
        confirm_label: "Save".to_string(),
        cancel_label: "Cancel".to_string(),
    }
}

// ============================================================================
// Project folders
// ============================================================================

/// Names of the recognized source files directly inside `folder`, sorted
pub fn supported_files_in(folder: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder {}", folder.display()))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_supported_file(name))
        .collect();
    names.sort();
    Ok(names)
}

/// Load every recognized source file in `folder` as an editor.
///
/// Files that are not valid UTF-8 are skipped with a warning.
pub fn read_project(folder: &Path) -> Result<Vec<(EditorId, String)>> {
    let mut values = Vec::new();
    for name in supported_files_in(folder)? {
        let path = folder.join(&name);
        let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        match String::from_utf8(bytes) {
            Ok(content) => values.push((EditorId::new(name), content)),
            Err(e) => tracing::warn!("Skipping {}: not UTF-8 ({})", path.display(), e.utf8_error()),
        }
    }
    Ok(values)
}

/// Write editors into `folder`.
///
/// Blank editors are not written, and a file left over from an earlier save of the
/// same editor is removed.
pub fn write_project(folder: &Path, values: &BTreeMap<EditorId, String>) -> Result<()> {
    // Check every name before writing anything
    if let Some(id) = values.keys().find(|id| !is_plain_file_name(id.as_str())) {
        bail!("Refusing to write editor {} outside {}", id, folder.display());
    }

    fs::create_dir_all(folder)
        .with_context(|| format!("Failed to create folder {}", folder.display()))?;

    for (id, content) in values {
        let path = folder.join(id.as_str());
        if content.trim().is_empty() {
            if path.is_file() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                tracing::debug!("Removed empty {}", path.display());
            }
            continue;
        }

        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_supported_files_ignore_others() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.js"), "1").unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();
        fs::create_dir(dir.path().join("lib.js")).unwrap();

        assert_eq!(supported_files_in(dir.path()).unwrap(), vec!["main.js"]);
    }

    #[test]
    fn test_write_then_read_project() {
        let dir = TempDir::new().unwrap();
        let mut values = BTreeMap::new();
        values.insert(EditorId::main(), "app".to_string());
        values.insert(EditorId::new("styles.css"), "  ".to_string());

        write_project(dir.path(), &values).unwrap();

        let loaded = read_project(dir.path()).unwrap();
        assert_eq!(loaded, vec![(EditorId::main(), "app".to_string())]);
    }

    #[test]
    fn test_read_skips_binary_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.js"), "app").unwrap();
        fs::write(dir.path().join("bundle.js"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let loaded = read_project(dir.path()).unwrap();
        assert_eq!(loaded, vec![(EditorId::main(), "app".to_string())]);
    }

    #[test]
    fn test_write_removes_stale_empty_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("styles.css"), "body {}").unwrap();

        let mut values = BTreeMap::new();
        values.insert(EditorId::new("styles.css"), String::new());
        write_project(dir.path(), &values).unwrap();

        assert!(!dir.path().join("styles.css").exists());
    }

    #[test]
    fn test_write_rejects_nested_names() {
        let dir = TempDir::new().unwrap();
        let mut values = BTreeMap::new();
        values.insert(EditorId::main(), "app".to_string());
        values.insert(EditorId::new("zz/evil.js"), "x".to_string());
        assert!(write_project(dir.path(), &values).is_err());
        assert!(!dir.path().join("main.js").exists());
    }

    #[test]
    fn test_overwrite_message() {
        let message = overwrite_message(Path::new("/home/me/fiddles/demo"));
        assert_eq!(message.message, "Save files to demo?");
        assert!(message
            .detail
            .starts_with("The folder \"/home/me/fiddles/demo\" already has code in it."));
    }
}
