//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/fiddle/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{EditorId, SplitDirection};

/// A file the "new fiddle" template starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Orientation of the outermost split when panels are tiled
    #[serde(default)]
    pub layout_direction: SplitDirection,
    /// Start blank editors hidden when a project is opened
    #[serde(default = "default_hide_empty")]
    pub hide_empty_on_load: bool,
    /// Files for a new fiddle
    #[serde(default = "default_template")]
    pub template: Vec<TemplateFile>,
}

fn default_hide_empty() -> bool {
    true
}

fn default_template() -> Vec<TemplateFile> {
    let file = |name: &str, content: &str| TemplateFile {
        name: name.to_string(),
        content: content.to_string(),
    };
    vec![
        file(
            "main.js",
            "const { app, BrowserWindow } = require('electron')\n\n\
             app.whenReady().then(() => {\n  new BrowserWindow({ width: 800, height: 600 }).loadFile('index.html')\n})\n",
        ),
        file("renderer.js", "// This file is loaded by index.html\n"),
        file(
            "index.html",
            "<!DOCTYPE html>\n<html>\n  <body>\n    <h1>Hello World!</h1>\n    <script src=\"./renderer.js\"></script>\n  </body>\n</html>\n",
        ),
        file("preload.js", ""),
        file("styles.css", "/* Empty */\n"),
    ]
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout_direction: SplitDirection::default(),
            hide_empty_on_load: default_hide_empty(),
            template: default_template(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Template files as editor values, skipping unsupported or nested names
    pub fn template_values(&self) -> Vec<(EditorId, String)> {
        self.template
            .iter()
            .filter(|file| {
                let supported = crate::model::is_supported_file(&file.name);
                if !supported {
                    tracing::warn!("Ignoring template file {}: unsupported name", file.name);
                }
                supported
            })
            .map(|file| (EditorId::new(file.name.as_str()), file.content.clone()))
            .collect()
    }
}
