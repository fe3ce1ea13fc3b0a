//! Tests for the editors dropdown and the "Add Editor" prompt

mod common;

use common::{ids, test_model};
use fiddle::messages::{DialogMsg, MenuMsg, Msg};
use fiddle::model::{DialogKind, EditorId, EditorState};
use fiddle::update::update;
use fiddle::view::{render_menu, Icon};

fn click(model: &mut fiddle::AppModel, key: &str) {
    let menu = render_menu(&model.mosaic, model.mosaic.layout());
    if let Some(msg) = menu.click(key) {
        update(model, Msg::menu(msg));
    }
}

fn add_editor(model: &mut fiddle::AppModel, filename: &str) {
    update(model, Msg::menu(MenuMsg::Toggle));
    click(model, "add-editor");
    update(model, Msg::Dialog(DialogMsg::SetInput(filename.to_string())));
    update(model, Msg::Dialog(DialogMsg::Confirm));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_menu_reflects_visibility() {
    let mut model = test_model(&["main.js", "index.html"]);
    update(&mut model, Msg::toggle("index.html"));

    let menu = render_menu(&model.mosaic, model.mosaic.layout());
    assert_eq!(menu.item("index.html").unwrap().icon, Icon::EyeOff);
    assert_eq!(menu.item("index.html").unwrap().text, "HTML (index.html)");
    assert!(menu.item("main.js").unwrap().disabled);
}

#[test]
fn test_locked_item_click_is_dropped() {
    let mut model = test_model(&["main.js"]);
    update(&mut model, Msg::menu(MenuMsg::Toggle));
    let revision = model.mosaic.layout_revision();

    click(&mut model, "main.js");

    assert_eq!(
        model.mosaic.state(&EditorId::main()),
        Some(EditorState::Visible)
    );
    assert_eq!(model.mosaic.layout_revision(), revision);
    assert!(model.ui.is_menu_open());
}

#[test]
fn test_selecting_an_item_closes_the_menu() {
    let mut model = test_model(&["main.js", "renderer.js"]);
    update(&mut model, Msg::menu(MenuMsg::Toggle));

    click(&mut model, "renderer.js");

    assert!(!model.ui.is_menu_open());
    assert_eq!(
        model.mosaic.state(&EditorId::new("renderer.js")),
        Some(EditorState::Hidden)
    );
}

#[test]
fn test_remove_from_nested_item() {
    let mut model = test_model(&["main.js", "preload.js"]);
    let menu = render_menu(&model.mosaic, model.mosaic.layout());
    let preload = menu.item("preload.js").unwrap();
    let fiddle::view::MenuEntry::Item(remove) = &preload.children[0] else {
        panic!("expected a nested remove item");
    };

    update(&mut model, Msg::menu(remove.on_click.clone()));

    assert_eq!(ids(&model), vec!["main.js"]);
}

#[test]
fn test_reset_layout_from_menu() {
    let mut model = test_model(&["main.js", "renderer.js"]);
    let before = model.mosaic.layout_revision();
    update(&mut model, Msg::menu(MenuMsg::Toggle));
    click(&mut model, "reset-layout");
    assert!(model.mosaic.layout_revision() > before);
    assert!(!model.ui.is_menu_open());
}

// ============================================================================
// Add Editor prompt
// ============================================================================

#[test]
fn test_add_editor_prompt_options() {
    let mut model = test_model(&["main.js"]);
    update(&mut model, Msg::menu(MenuMsg::AddEditor));

    let dialog = model.ui.active_dialog.as_ref().unwrap();
    assert_eq!(dialog.options.kind, DialogKind::Confirm);
    assert_eq!(dialog.options.label, "Enter a filename to add");
    assert_eq!(dialog.options.ok, "Create");
    assert_eq!(dialog.options.cancel.as_deref(), Some("Cancel"));
    assert_eq!(dialog.options.placeholder.as_deref(), Some("file.js"));
    assert!(dialog.options.wants_input);
}

#[test]
fn test_add_editor_confirmed() {
    let mut model = test_model(&["main.js"]);
    add_editor(&mut model, "worker.js");

    assert!(!model.ui.has_dialog());
    assert_eq!(ids(&model), vec!["main.js", "worker.js"]);
    assert_eq!(
        model.mosaic.content(&EditorId::new("worker.js")),
        Some("// Empty")
    );
    assert_eq!(model.mosaic.mosaic_leaf_count(), 2);
}

#[test]
fn test_add_editor_cancelled() {
    let mut model = test_model(&["main.js"]);
    update(&mut model, Msg::menu(MenuMsg::AddEditor));
    update(&mut model, Msg::Dialog(DialogMsg::SetInput("worker.js".to_string())));
    update(&mut model, Msg::Dialog(DialogMsg::Cancel));

    assert!(!model.ui.has_dialog());
    assert!(model.ui.pending_add_editor.is_none());
    assert_eq!(ids(&model), vec!["main.js"]);
}

#[test]
fn test_add_editor_blank_name_does_nothing() {
    let mut model = test_model(&["main.js"]);
    add_editor(&mut model, "   ");

    assert!(!model.ui.has_dialog());
    assert_eq!(ids(&model), vec!["main.js"]);
}

#[test]
fn test_add_editor_unsupported_shows_warning() {
    let mut model = test_model(&["main.js"]);
    add_editor(&mut model, "notes.txt");

    let dialog = model.ui.active_dialog.as_ref().unwrap();
    assert_eq!(dialog.options.kind, DialogKind::Warning);
    assert_eq!(
        dialog.options.label,
        "Cannot add file notes.txt: Must be .js, .ts, .html, .css or .json"
    );
    assert_eq!(dialog.options.cancel, None);

    update(&mut model, Msg::Dialog(DialogMsg::Cancel));
    assert!(!model.ui.has_dialog());
    assert_eq!(ids(&model), vec!["main.js"]);
}

#[test]
fn test_add_editor_nested_name_shows_warning() {
    let mut model = test_model(&["main.js"]);
    add_editor(&mut model, "zz/evil.js");

    let dialog = model.ui.active_dialog.as_ref().unwrap();
    assert_eq!(dialog.options.kind, DialogKind::Warning);
    assert_eq!(
        dialog.options.label,
        "Cannot add file zz/evil.js: Must be a file name without folders"
    );
    assert_eq!(ids(&model), vec!["main.js"]);
}

#[test]
fn test_add_editor_duplicate_shows_warning() {
    let mut model = test_model(&["main.js", "styles.css"]);
    add_editor(&mut model, "styles.css");

    let dialog = model.ui.active_dialog.as_ref().unwrap();
    assert_eq!(
        dialog.options.label,
        "Cannot add file styles.css: File already exists"
    );
    assert_eq!(ids(&model), vec!["main.js", "styles.css"]);
}
