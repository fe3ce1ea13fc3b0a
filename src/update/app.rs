//! App message handlers (project files, window events)

use crate::commands::Cmd;
use crate::ipc::IpcEventKind;
use crate::messages::AppMsg;
use crate::model::{AppModel, DialogOptions};

/// Handle app messages (project files, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ShowOpenDialog => Some(Cmd::ShowOpenProjectDialog),

        AppMsg::ShowSaveDialog { intent, as_label } => {
            Some(Cmd::ShowSaveProjectDialog { intent, as_label })
        }

        AppMsg::Save => match model.project_path.clone() {
            Some(path) => update_app(model, AppMsg::SaveProject(path)),
            None => Some(Cmd::ShowSaveProjectDialog {
                intent: IpcEventKind::SaveRequested,
                as_label: None,
            }),
        },

        AppMsg::OpenProject(path) => {
            if model.ui.is_loading {
                tracing::warn!("Ignoring open of {} while loading", path.display());
                return None;
            }
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadProject { path })
        }

        AppMsg::SaveProject(path) => {
            if model.ui.is_saving {
                tracing::warn!("Ignoring save to {} while saving", path.display());
                return None;
            }
            model.ui.is_saving = true;
            model.ui.set_status("Saving...");
            Some(Cmd::SaveProject {
                path,
                values: model.mosaic.values(),
            })
        }

        AppMsg::ProjectLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(values) if values.is_empty() => {
                    tracing::warn!("No editable files in {}", path.display());
                    model.ui.set_status("Nothing to open");
                    model.ui.show_dialog(DialogOptions::warning(format!(
                        "No supported files found in {}",
                        path.display()
                    )));
                }
                Ok(values) => {
                    let count = values.len();
                    model.mosaic.set(values, model.config.hide_empty_on_load);
                    model.project_path = Some(path);
                    model
                        .ui
                        .set_status(format!("Opened {} ({} files)", model.project_name(), count));
                    tracing::info!("Loaded {} editors", count);
                }
                Err(e) => {
                    tracing::error!("Failed to open {}: {}", path.display(), e);
                    model.ui.set_status("Open failed");
                    model
                        .ui
                        .show_dialog(DialogOptions::warning(format!("Could not open fiddle: {}", e)));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::ProjectSaved { path, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    model.mosaic.mark_saved();
                    model.project_path = Some(path);
                    model.ui.set_status(format!("Saved {}", model.project_name()));
                }
                Err(e) => {
                    tracing::error!("Failed to save {}: {}", path.display(), e);
                    model.ui.set_status("Save failed");
                    model
                        .ui
                        .show_dialog(DialogOptions::warning(format!("Could not save fiddle: {}", e)));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::model::EditorId;
    use std::path::PathBuf;

    fn model() -> AppModel {
        AppModel::new(EditorConfig::default())
    }

    #[test]
    fn test_save_without_project_asks_for_folder() {
        let mut model = model();
        assert_eq!(
            update_app(&mut model, AppMsg::Save),
            Some(Cmd::ShowSaveProjectDialog {
                intent: IpcEventKind::SaveRequested,
                as_label: None,
            })
        );
    }

    #[test]
    fn test_save_with_project_writes_values() {
        let mut model = model();
        model.project_path = Some(PathBuf::from("/tmp/demo"));

        let cmd = update_app(&mut model, AppMsg::Save);
        match cmd {
            Some(Cmd::SaveProject { path, values }) => {
                assert_eq!(path, PathBuf::from("/tmp/demo"));
                assert_eq!(values, model.mosaic.values());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(model.ui.is_saving);
    }

    #[test]
    fn test_project_loaded_replaces_editors() {
        let mut model = model();
        model.ui.is_loading = true;
        let values = vec![
            (EditorId::new("styles.css"), "body {}".to_string()),
            (EditorId::main(), "app".to_string()),
        ];

        update_app(
            &mut model,
            AppMsg::ProjectLoaded {
                path: PathBuf::from("/tmp/demo"),
                result: Ok(values),
            },
        );

        assert!(!model.ui.is_loading);
        assert_eq!(model.project_name(), "demo");
        let ids: Vec<&str> = model.mosaic.ids().map(EditorId::as_str).collect();
        assert_eq!(ids, vec!["main.js", "styles.css"]);
        assert!(!model.mosaic.is_edited());
    }

    #[test]
    fn test_failed_load_shows_warning() {
        let mut model = model();
        let before: Vec<EditorId> = model.mosaic.ids().cloned().collect();

        update_app(
            &mut model,
            AppMsg::ProjectLoaded {
                path: PathBuf::from("/tmp/demo"),
                result: Err("permission denied".to_string()),
            },
        );

        assert!(model.ui.has_dialog());
        assert!(model.project_path.is_none());
        let after: Vec<EditorId> = model.mosaic.ids().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_saved_clears_edited_flag() {
        let mut model = model();
        model
            .mosaic
            .set_content(&EditorId::main(), "changed")
            .unwrap();
        assert!(model.mosaic.is_edited());

        update_app(
            &mut model,
            AppMsg::ProjectSaved {
                path: PathBuf::from("/tmp/demo"),
                result: Ok(()),
            },
        );
        assert!(!model.mosaic.is_edited());
        assert_eq!(model.project_path, Some(PathBuf::from("/tmp/demo")));
    }
}
