//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use fiddle::config::EditorConfig;
use fiddle::files::{FileDialogs, MessageBox};
use fiddle::model::{AppModel, EditorId};

/// A model holding exactly `files`, all with non-empty content
pub fn test_model(files: &[&str]) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default());
    model.mosaic.set(
        files
            .iter()
            .map(|name| (EditorId::new(*name), format!("// {}", name))),
        true,
    );
    model
}

/// Ids in registry order
pub fn ids(model: &AppModel) -> Vec<String> {
    model.mosaic.ids().map(|id| id.to_string()).collect()
}

/// Ids currently in the layout, sorted
pub fn layout_ids(model: &AppModel) -> Vec<String> {
    let mut ids: Vec<String> = model
        .mosaic
        .layout()
        .leaves()
        .into_iter()
        .map(|id| id.to_string())
        .collect();
    ids.sort();
    ids
}

/// What the confirmation dialog answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Save,
    Cancel,
    Fail,
}

/// Everything the scripted dialogs were asked, in order
#[derive(Debug, Default)]
pub struct DialogLog {
    pub titles: Vec<String>,
    pub button_labels: Vec<String>,
    pub confirmations: Vec<MessageBox>,
}

/// Scripted [`FileDialogs`]: folders are handed out in order, `None` once empty
#[derive(Debug, Clone)]
pub struct ScriptedDialogs {
    folders: Rc<RefCell<VecDeque<PathBuf>>>,
    answer: ConfirmAnswer,
    pub log: Rc<RefCell<DialogLog>>,
}

impl ScriptedDialogs {
    pub fn new(folders: impl IntoIterator<Item = PathBuf>, answer: ConfirmAnswer) -> Self {
        Self {
            folders: Rc::new(RefCell::new(folders.into_iter().collect())),
            answer,
            log: Rc::new(RefCell::new(DialogLog::default())),
        }
    }

    /// Dialogs the user cancels straight away
    pub fn cancelled() -> Self {
        Self::new(Vec::new(), ConfirmAnswer::Cancel)
    }

    pub fn confirmation_count(&self) -> usize {
        self.log.borrow().confirmations.len()
    }
}

impl FileDialogs for ScriptedDialogs {
    fn pick_project_folder(&self, title: &str) -> Option<PathBuf> {
        self.log.borrow_mut().titles.push(title.to_string());
        self.folders.borrow_mut().pop_front()
    }

    fn pick_save_folder(&self, title: &str, button_label: &str) -> Option<PathBuf> {
        let mut log = self.log.borrow_mut();
        log.titles.push(title.to_string());
        log.button_labels.push(button_label.to_string());
        self.folders.borrow_mut().pop_front()
    }

    fn confirm(&self, message: &MessageBox) -> Result<bool> {
        self.log.borrow_mut().confirmations.push(message.clone());
        match self.answer {
            ConfirmAnswer::Save => Ok(true),
            ConfirmAnswer::Cancel => Ok(false),
            ConfirmAnswer::Fail => Err(anyhow!("dialog backend unavailable")),
        }
    }
}
