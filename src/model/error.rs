//! Errors reported by the editor mosaic

use super::editor_id::EditorId;

/// Errors that can occur when changing the set of editors or their layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicError {
    /// An editor with this id already exists
    DuplicateIdentifier(EditorId),
    /// The default editor cannot be removed
    ProtectedIdentifier(EditorId),
    /// The file name does not map to a supported editor kind
    UnsupportedFileKind(String),
    /// The file name has directory parts
    InvalidFileName(String),
    /// Hiding this editor would leave no panel visible
    LastVisible(EditorId),
    /// No editor with this id exists
    NotFound(EditorId),
    /// A layout tree that does not match the visible editors
    InvalidLayout(String),
}

impl MosaicError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateIdentifier(id) => format!("Cannot add file {}: File already exists", id),
            Self::ProtectedIdentifier(id) => format!("Cannot remove {}: it is the main file", id),
            Self::UnsupportedFileKind(name) => {
                format!("Cannot add file {}: Must be .js, .ts, .html, .css or .json", name)
            }
            Self::InvalidFileName(name) => {
                format!("Cannot add file {}: Must be a file name without folders", name)
            }
            Self::LastVisible(id) => format!("Cannot hide {}: at least one editor must be shown", id),
            Self::NotFound(id) => format!("No editor named {}", id),
            Self::InvalidLayout(reason) => format!("Invalid layout: {}", reason),
        }
    }
}

impl std::fmt::Display for MosaicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentifier(id) => write!(f, "duplicate editor id {}", id),
            Self::ProtectedIdentifier(id) => write!(f, "editor {} is protected", id),
            Self::UnsupportedFileKind(name) => write!(f, "unsupported file kind: {}", name),
            Self::InvalidFileName(name) => write!(f, "invalid file name: {}", name),
            Self::LastVisible(id) => write!(f, "editor {} is the last visible panel", id),
            Self::NotFound(id) => write!(f, "editor {} not found", id),
            Self::InvalidLayout(reason) => write!(f, "invalid layout: {}", reason),
        }
    }
}

impl std::error::Error for MosaicError {}
