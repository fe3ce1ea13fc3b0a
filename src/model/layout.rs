//! Mosaic layout - the tiled arrangement of visible editor panels
//!
//! The layout is a split tree whose leaves are editor ids. It has no identity of
//! its own: the mosaic recomputes it whenever the visible set changes, keeping as
//! much of the previous split structure as it can.

use serde::{Deserialize, Serialize};

use super::editor_id::EditorId;

// ============================================================================
// Layout Primitives
// ============================================================================

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Width of splitter bars in pixels
pub const SPLITTER_WIDTH: f32 = 6.0;

// ============================================================================
// Layout Tree
// ============================================================================

/// Direction for splitting panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl SplitDirection {
    pub fn perpendicular(self) -> Self {
        match self {
            SplitDirection::Horizontal => SplitDirection::Vertical,
            SplitDirection::Vertical => SplitDirection::Horizontal,
        }
    }
}

/// A container that splits space between children
#[derive(Debug, Clone, PartialEq)]
pub struct SplitContainer {
    pub direction: SplitDirection,
    pub children: Vec<MosaicNode>,
    /// Proportional sizes (0.0 to 1.0, must sum to 1.0)
    pub ratios: Vec<f32>,
}

impl SplitContainer {
    /// Two children sharing the space evenly
    pub fn halves(direction: SplitDirection, first: MosaicNode, second: MosaicNode) -> Self {
        Self {
            direction,
            children: vec![first, second],
            ratios: vec![0.5, 0.5],
        }
    }

    /// Make ratios match the children and sum to 1.0
    fn normalize_ratios(&mut self) {
        let count = self.children.len();
        if count == 0 {
            self.ratios.clear();
            return;
        }

        if self.ratios.len() != count || !valid_ratios(&self.ratios) {
            self.ratios = vec![1.0 / count as f32; count];
        } else {
            let sum: f32 = self.ratios.iter().sum();
            for ratio in &mut self.ratios {
                *ratio /= sum;
            }
        }
    }
}

/// Ratios that can be scaled to sum to 1.0: finite, non-negative, positive total
pub fn valid_ratios(ratios: &[f32]) -> bool {
    let sum: f32 = ratios.iter().sum();
    sum.is_finite() && sum > 0.0 && ratios.iter().all(|r| r.is_finite() && *r >= 0.0)
}

/// A node in the layout tree - empty, a single editor panel, or a split
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MosaicNode {
    #[default]
    Empty,
    Leaf(EditorId),
    Split(SplitContainer),
}

impl MosaicNode {
    /// All leaf ids, depth-first, left to right
    pub fn leaves(&self) -> Vec<&EditorId> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Number of panels in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            MosaicNode::Empty => 0,
            MosaicNode::Leaf(_) => 1,
            MosaicNode::Split(container) => container.children.iter().map(Self::leaf_count).sum(),
        }
    }

    pub fn contains(&self, id: &EditorId) -> bool {
        match self {
            MosaicNode::Empty => false,
            MosaicNode::Leaf(leaf) => leaf == id,
            MosaicNode::Split(container) => container.children.iter().any(|c| c.contains(id)),
        }
    }

    /// Find the split container addressed by `path` (child indices from the root)
    pub fn split_at_path_mut(&mut self, path: &[usize]) -> Option<&mut SplitContainer> {
        match self {
            MosaicNode::Split(container) => match path.split_first() {
                None => Some(container),
                Some((&index, rest)) => container.children.get_mut(index)?.split_at_path_mut(rest),
            },
            _ => None,
        }
    }

    /// Drop empty children, collapse single-child splits and fix up ratios
    pub fn normalize(&mut self) {
        if let MosaicNode::Split(container) = self {
            for child in &mut container.children {
                child.normalize();
            }

            let mut kept_ratios = Vec::with_capacity(container.children.len());
            let mut kept_children = Vec::with_capacity(container.children.len());
            for (i, child) in container.children.drain(..).enumerate() {
                if !matches!(child, MosaicNode::Empty) {
                    kept_ratios.push(container.ratios.get(i).copied().unwrap_or(0.0));
                    kept_children.push(child);
                }
            }
            container.children = kept_children;
            container.ratios = kept_ratios;
            container.normalize_ratios();

            match container.children.len() {
                0 => *self = MosaicNode::Empty,
                1 => {
                    let remaining = container.children.remove(0);
                    *self = remaining;
                }
                _ => {}
            }
        }
    }
}

fn collect_leaves<'a>(node: &'a MosaicNode, out: &mut Vec<&'a EditorId>) {
    match node {
        MosaicNode::Empty => {}
        MosaicNode::Leaf(id) => out.push(id),
        MosaicNode::Split(container) => {
            for child in &container.children {
                collect_leaves(child, out);
            }
        }
    }
}

// ============================================================================
// Arrangement
// ============================================================================

/// Build the default tiling for `ids`.
///
/// Each split halves the list; the orientation alternates with depth, starting
/// with `direction` at the root.
pub fn canonical_arrangement(ids: &[EditorId], direction: SplitDirection) -> MosaicNode {
    match ids {
        [] => MosaicNode::Empty,
        [only] => MosaicNode::Leaf(only.clone()),
        _ => {
            let half = ids.len() / 2;
            let next = direction.perpendicular();
            MosaicNode::Split(SplitContainer::halves(
                direction,
                canonical_arrangement(&ids[..half], next),
                canonical_arrangement(&ids[half..], next),
            ))
        }
    }
}

/// Bring `layout` in line with `visible`, keeping the existing structure for
/// panels that stay. Stale and duplicate leaves are removed first, then each
/// newly visible id is inserted next to the last panel.
pub fn reconcile(layout: &mut MosaicNode, visible: &[EditorId], root_direction: SplitDirection) {
    let present: Vec<EditorId> = layout.leaves().into_iter().cloned().collect();
    let mut seen: Vec<&EditorId> = Vec::with_capacity(present.len());

    for id in &present {
        let duplicate = seen.contains(&id);
        if !visible.contains(id) || duplicate {
            remove_leaf(layout, id);
        } else {
            seen.push(id);
        }
    }

    for id in visible {
        if !layout.contains(id) {
            insert_leaf(layout, id.clone(), root_direction);
        }
    }
}

/// Insert a panel by splitting the last leaf, perpendicular to its parent split
pub fn insert_leaf(layout: &mut MosaicNode, id: EditorId, root_direction: SplitDirection) {
    split_last_leaf(layout, id, root_direction);
}

fn split_last_leaf(node: &mut MosaicNode, id: EditorId, direction: SplitDirection) {
    match node {
        MosaicNode::Split(container) if !container.children.is_empty() => {
            let child_direction = container.direction.perpendicular();
            let last = container.children.len() - 1;
            split_last_leaf(&mut container.children[last], id, child_direction);
        }
        MosaicNode::Leaf(_) => {
            let existing = std::mem::take(node);
            *node = MosaicNode::Split(SplitContainer::halves(
                direction,
                existing,
                MosaicNode::Leaf(id),
            ));
        }
        MosaicNode::Empty | MosaicNode::Split(_) => *node = MosaicNode::Leaf(id),
    }
}

/// Remove a panel from the tree, collapsing splits as needed.
/// Returns true if the leaf was found and removed.
pub fn remove_leaf(layout: &mut MosaicNode, id: &EditorId) -> bool {
    if matches!(layout, MosaicNode::Leaf(leaf) if leaf == id) {
        *layout = MosaicNode::Empty;
        return true;
    }
    remove_leaf_from_split(layout, id)
}

fn remove_leaf_from_split(layout: &mut MosaicNode, id: &EditorId) -> bool {
    let MosaicNode::Split(container) = layout else {
        return false;
    };

    let found_index = container
        .children
        .iter()
        .position(|child| matches!(child, MosaicNode::Leaf(leaf) if leaf == id));

    if let Some(index) = found_index {
        container.children.remove(index);
        if index < container.ratios.len() {
            container.ratios.remove(index);
        }
        container.normalize_ratios();

        // If only one child remains, collapse the split
        if container.children.len() == 1 {
            let remaining = container.children.remove(0);
            *layout = remaining;
        }
        return true;
    }

    // Nested splits collapse themselves
    container
        .children
        .iter_mut()
        .any(|child| remove_leaf_from_split(child, id))
}

// ============================================================================
// Geometry
// ============================================================================

/// A visible editor panel and the space it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: EditorId,
    pub rect: Rect,
}

/// Represents a draggable splitter bar between panels
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterBar {
    /// Direction of the split this bar controls
    pub direction: SplitDirection,
    /// The hit-testing rectangle for this splitter
    pub rect: Rect,
    /// Path of the owning split container from the root
    pub path: Vec<usize>,
    /// Index of this splitter within its parent container
    pub index: usize,
}

/// Panel rects and splitter bars for one layout pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutView {
    pub panels: Vec<Panel>,
    pub splitters: Vec<SplitterBar>,
}

impl LayoutView {
    /// Find the panel at a given point (for mouse clicks)
    pub fn panel_at_point(&self, x: f32, y: f32) -> Option<&EditorId> {
        self.panels
            .iter()
            .find(|panel| panel.rect.contains(x, y))
            .map(|panel| &panel.id)
    }

    /// Find splitter bar at a given point (for drag handling)
    pub fn splitter_at_point(&self, x: f32, y: f32) -> Option<&SplitterBar> {
        self.splitters.iter().find(|s| s.rect.contains(x, y))
    }

    pub fn panel(&self, id: &EditorId) -> Option<&Panel> {
        self.panels.iter().find(|panel| &panel.id == id)
    }
}

/// Compute panel rects for the tree inside `available`
pub fn compute_layout(node: &MosaicNode, available: Rect, splitter_width: f32) -> LayoutView {
    let mut view = LayoutView::default();
    let mut path = Vec::new();
    compute_layout_node(node, available, splitter_width, &mut path, &mut view);
    view
}

fn compute_layout_node(
    node: &MosaicNode,
    rect: Rect,
    splitter_width: f32,
    path: &mut Vec<usize>,
    view: &mut LayoutView,
) {
    match node {
        MosaicNode::Empty => {}
        MosaicNode::Leaf(id) => view.panels.push(Panel {
            id: id.clone(),
            rect,
        }),
        MosaicNode::Split(container) => {
            let children = &container.children;
            if children.is_empty() {
                return;
            }

            let mut offset = 0.0;
            let total_size = match container.direction {
                SplitDirection::Horizontal => rect.width,
                SplitDirection::Vertical => rect.height,
            };

            for (i, child) in children.iter().enumerate() {
                let ratio = container
                    .ratios
                    .get(i)
                    .copied()
                    .unwrap_or(1.0 / children.len() as f32);
                let child_size = total_size * ratio;

                let child_rect = match container.direction {
                    SplitDirection::Horizontal => {
                        Rect::new(rect.x + offset, rect.y, child_size, rect.height)
                    }
                    SplitDirection::Vertical => {
                        Rect::new(rect.x, rect.y + offset, rect.width, child_size)
                    }
                };

                // Splitter between children (not after the last one)
                if i < children.len() - 1 {
                    let bar_rect = match container.direction {
                        SplitDirection::Horizontal => Rect::new(
                            rect.x + offset + child_size - splitter_width / 2.0,
                            rect.y,
                            splitter_width,
                            rect.height,
                        ),
                        SplitDirection::Vertical => Rect::new(
                            rect.x,
                            rect.y + offset + child_size - splitter_width / 2.0,
                            rect.width,
                            splitter_width,
                        ),
                    };
                    view.splitters.push(SplitterBar {
                        direction: container.direction,
                        rect: bar_rect,
                        path: path.clone(),
                        index: i,
                    });
                }

                path.push(i);
                compute_layout_node(child, child_rect, splitter_width, path, view);
                path.pop();

                offset += child_size;
            }
        }
    }
}
