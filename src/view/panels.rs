//! Text outline of the panel layout

use std::fmt::Write as _;

use crate::model::{LayoutView, MosaicNode, SplitDirection};

/// Indented outline of the split tree, one node per line
pub fn describe_layout(node: &MosaicNode) -> String {
    let mut out = String::new();
    describe_node(node, 1.0, 0, &mut out);
    out
}

fn describe_node(node: &MosaicNode, share: f32, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let percent = (share * 100.0).round() as u32;
    match node {
        MosaicNode::Empty => {
            let _ = writeln!(out, "{}(empty)", indent);
        }
        MosaicNode::Leaf(id) => {
            let _ = writeln!(out, "{}{} {}%", indent, id, percent);
        }
        MosaicNode::Split(container) => {
            let label = match container.direction {
                SplitDirection::Horizontal => "row",
                SplitDirection::Vertical => "column",
            };
            let _ = writeln!(out, "{}{} {}%", indent, label, percent);
            for (i, child) in container.children.iter().enumerate() {
                let ratio = container.ratios.get(i).copied().unwrap_or(0.0);
                describe_node(child, ratio, depth + 1, out);
            }
        }
    }
}

/// One line per panel with its pixel rect
pub fn describe_panels(view: &LayoutView) -> String {
    let mut out = String::new();
    for panel in &view.panels {
        let r = panel.rect;
        let _ = writeln!(
            out,
            "{:<16} x={:<6.0} y={:<6.0} {:.0}x{:.0}",
            panel.id.as_str(),
            r.x,
            r.y,
            r.width,
            r.height
        );
    }
    out
}
