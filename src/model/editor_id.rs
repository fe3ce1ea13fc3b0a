//! Editor identifiers and file kinds
//!
//! An editor is named after the virtual file it holds (`main.js`, `styles.css`, ...).
//! `main.js` is reserved: it can be hidden but never removed.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The reserved default editor
pub const MAIN_JS: &str = "main.js";

/// Default files in the order they are shown after a project load
pub const DEFAULT_EDITORS: &[&str] = &[MAIN_JS, "renderer.js", "index.html", "preload.js", "styles.css"];

/// Unique identifier for an editor (its file name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorId(String);

impl EditorId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The reserved `main.js` editor
    pub fn main() -> Self {
        Self(MAIN_JS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the reserved default editor
    #[inline]
    pub fn is_main(&self) -> bool {
        self.0 == MAIN_JS
    }

    /// The file kind, if the extension is one the playground can edit
    pub fn kind(&self) -> Option<EditorKind> {
        EditorKind::from_filename(&self.0)
    }

    /// Human-readable menu title, e.g. "Main Process (main.js)"
    pub fn title(&self) -> String {
        let label = match self.0.as_str() {
            "main.js" => "Main Process",
            "renderer.js" => "Renderer Process",
            "preload.js" => "Preload",
            "index.html" => "HTML",
            "styles.css" => "Stylesheet",
            _ => return self.0.clone(),
        };
        format!("{} ({})", label, self.0)
    }

    /// Position among the default files, used to order a loaded project
    pub fn default_rank(&self) -> Option<usize> {
        DEFAULT_EDITORS.iter().position(|name| *name == self.0)
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EditorId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Languages an editor can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
}

impl EditorKind {
    /// Classify a file name by extension (case-insensitive)
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "cjs" | "mjs" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Placeholder content for a freshly added editor
    pub fn empty_content(self) -> &'static str {
        match self {
            Self::JavaScript | Self::TypeScript => "// Empty",
            Self::Html => "<!-- Empty -->",
            Self::Css => "/* Empty */",
            Self::Json => "{}",
        }
    }
}

/// A name with a single path component, so it stays inside the project folder
pub fn is_plain_file_name(name: &str) -> bool {
    Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}

/// Check whether a file name is one the playground loads into an editor
pub fn is_supported_file(name: &str) -> bool {
    is_plain_file_name(name) && EditorKind::from_filename(name).is_some()
}

/// Placeholder content for a new editor, empty for unknown kinds
pub fn empty_content(id: &EditorId) -> String {
    id.kind()
        .map(|kind| kind.empty_content().to_string())
        .unwrap_or_default()
}
