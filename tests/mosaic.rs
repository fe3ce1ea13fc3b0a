//! Tests for registry and layout messages

mod common;

use common::{ids, layout_ids, test_model};
use fiddle::messages::{MosaicMsg, Msg};
use fiddle::model::{
    DialogKind, EditorId, EditorState, MosaicNode, Rect, SplitContainer, SplitDirection,
};
use fiddle::update::update;

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_toggle_scenario_keeps_layout_in_sync() {
    let mut model = test_model(&["main.js"]);

    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::Add {
            id: EditorId::new("styles.css"),
            content: String::new(),
        }),
    );
    assert_eq!(model.mosaic.mosaic_leaf_count(), 2);
    assert_eq!(layout_ids(&model), vec!["main.js", "styles.css"]);

    update(&mut model, Msg::toggle("main.js"));
    assert_eq!(
        model.mosaic.state(&EditorId::main()),
        Some(EditorState::Hidden)
    );
    assert_eq!(layout_ids(&model), vec!["styles.css"]);

    // styles.css is now the only panel
    let revision = model.mosaic.layout_revision();
    update(&mut model, Msg::toggle("styles.css"));
    assert_eq!(
        model.mosaic.state(&EditorId::new("styles.css")),
        Some(EditorState::Visible)
    );
    assert_eq!(model.mosaic.layout_revision(), revision);
    assert_eq!(layout_ids(&model), vec!["styles.css"]);
}

#[test]
fn test_add_then_remove_restores_visible_count() {
    let mut model = test_model(&["main.js", "renderer.js"]);
    let before = ids(&model);
    let visible = model.mosaic.mosaic_leaf_count();

    let id = EditorId::new("extra.ts");
    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::Add {
            id: id.clone(),
            content: "let x = 1".to_string(),
        }),
    );
    update(&mut model, Msg::Mosaic(MosaicMsg::Remove(id)));

    assert_eq!(ids(&model), before);
    assert_eq!(model.mosaic.mosaic_leaf_count(), visible);
}

#[test]
fn test_duplicate_add_shows_warning() {
    let mut model = test_model(&["main.js", "index.html"]);

    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::Add {
            id: EditorId::new("index.html"),
            content: "<p>".to_string(),
        }),
    );

    let dialog = model.ui.active_dialog.as_ref().unwrap();
    assert_eq!(dialog.options.kind, DialogKind::Warning);
    assert_eq!(
        dialog.options.label,
        "Cannot add file index.html: File already exists"
    );
    assert_eq!(
        model.mosaic.content(&EditorId::new("index.html")),
        Some("// index.html")
    );
}

#[test]
fn test_set_content_marks_edited() {
    let mut model = test_model(&["main.js"]);
    assert!(!model.mosaic.is_edited());

    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::SetContent {
            id: EditorId::main(),
            content: "console.log(1)".to_string(),
        }),
    );

    assert!(model.mosaic.is_edited());
    assert_eq!(
        model.mosaic.content(&EditorId::main()),
        Some("console.log(1)")
    );
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_reset_layout_is_idempotent() {
    let mut model = test_model(&["main.js", "renderer.js", "index.html", "styles.css"]);

    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::ResizeSplit {
            path: vec![],
            ratios: vec![0.8, 0.2],
        }),
    );
    update(&mut model, Msg::Mosaic(MosaicMsg::ResetLayout));
    let once = model.mosaic.layout().clone();
    update(&mut model, Msg::Mosaic(MosaicMsg::ResetLayout));

    assert_eq!(model.mosaic.layout(), &once);
    match &once {
        MosaicNode::Split(container) => assert_eq!(container.ratios, vec![0.5, 0.5]),
        other => panic!("expected a split, got {:?}", other),
    }
}

#[test]
fn test_user_layout_is_kept_across_toggles() {
    let mut model = test_model(&["main.js", "renderer.js", "index.html"]);

    let arranged = MosaicNode::Split(SplitContainer {
        direction: SplitDirection::Vertical,
        children: vec![
            MosaicNode::Leaf(EditorId::new("index.html")),
            MosaicNode::Leaf(EditorId::new("main.js")),
            MosaicNode::Leaf(EditorId::new("renderer.js")),
        ],
        ratios: vec![0.5, 0.25, 0.25],
    });
    update(&mut model, Msg::Mosaic(MosaicMsg::SetLayout(arranged)));
    assert!(!model.ui.has_dialog());

    update(&mut model, Msg::toggle("renderer.js"));

    match model.mosaic.layout() {
        MosaicNode::Split(container) => {
            assert_eq!(container.direction, SplitDirection::Vertical);
            assert_eq!(
                container.children,
                vec![
                    MosaicNode::Leaf(EditorId::new("index.html")),
                    MosaicNode::Leaf(EditorId::new("main.js")),
                ]
            );
            let total: f32 = container.ratios.iter().sum();
            assert!((total - 1.0).abs() < 1e-5);
        }
        other => panic!("expected a split, got {:?}", other),
    }
}

#[test]
fn test_invalid_layout_is_rejected_with_warning() {
    let mut model = test_model(&["main.js", "renderer.js"]);
    let before = model.mosaic.layout().clone();

    update(
        &mut model,
        Msg::Mosaic(MosaicMsg::SetLayout(MosaicNode::Leaf(EditorId::main()))),
    );

    assert_eq!(model.mosaic.layout(), &before);
    assert!(model.ui.has_dialog());
}

#[test]
fn test_panels_cover_window() {
    let mut model = test_model(&["main.js", "renderer.js", "index.html"]);
    update(&mut model, Msg::resize(900, 600));

    let view = model.layout_view();
    assert_eq!(view.panels.len(), 3);
    assert_eq!(view.splitters.len(), 2);

    let window = Rect::new(0.0, 0.0, 900.0, 600.0);
    let covered: f32 = view.panels.iter().map(|p| p.rect.area()).sum();
    assert!((covered - window.area()).abs() < 1.0);

    // Canonical split: main.js on the left, the rest on the right
    assert_eq!(view.panel_at_point(10.0, 10.0), Some(&EditorId::main()));
    assert!(view.splitter_at_point(450.0, 300.0).is_some());
}
