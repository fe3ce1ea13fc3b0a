//! Editor mosaic - the registry of editors and the layout derived from it
//!
//! Entries keep insertion order. Every successful mutation leaves the registry and
//! the layout consistent before observers are notified, so an observer can read the
//! whole mosaic from inside its callback.

use std::collections::BTreeMap;
use std::fmt;

use super::editor_id::EditorId;
use super::error::MosaicError;
use super::layout::{
    canonical_arrangement, compute_layout, reconcile, valid_ratios, LayoutView, MosaicNode, Rect,
    SplitDirection, SPLITTER_WIDTH,
};

/// Whether an editor currently has a panel in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Visible,
    Hidden,
}

impl EditorState {
    pub fn is_visible(self) -> bool {
        self == EditorState::Visible
    }

    fn flipped(self) -> Self {
        match self {
            EditorState::Visible => EditorState::Hidden,
            EditorState::Hidden => EditorState::Visible,
        }
    }
}

/// One named virtual file
#[derive(Debug, Clone, PartialEq)]
pub struct EditorEntry {
    pub id: EditorId,
    pub content: String,
    pub state: EditorState,
}

/// What changed, delivered to observers after the mutation completed
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicEvent {
    Added(EditorId),
    Removed(EditorId),
    Toggled { id: EditorId, state: EditorState },
    ContentChanged(EditorId),
    /// The user rearranged or resized panels
    LayoutChanged,
    LayoutReset,
    /// All editors were replaced (project load)
    Replaced,
}

/// Handle returned by [`EditorMosaic::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&EditorMosaic, &MosaicEvent)>;

pub struct EditorMosaic {
    entries: Vec<EditorEntry>,
    layout: MosaicNode,
    /// Root orientation of the canonical arrangement
    direction: SplitDirection,
    layout_revision: u64,
    is_edited: bool,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for EditorMosaic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorMosaic")
            .field("entries", &self.entries)
            .field("layout", &self.layout)
            .field("direction", &self.direction)
            .field("layout_revision", &self.layout_revision)
            .field("is_edited", &self.is_edited)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for EditorMosaic {
    fn default() -> Self {
        Self::new(SplitDirection::default())
    }
}

impl EditorMosaic {
    /// A mosaic holding only an empty, visible `main.js`
    pub fn new(direction: SplitDirection) -> Self {
        let main = EditorId::main();
        Self {
            layout: MosaicNode::Leaf(main.clone()),
            entries: vec![EditorEntry {
                id: main,
                content: String::new(),
                state: EditorState::Visible,
            }],
            direction,
            layout_revision: 0,
            is_edited: false,
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// A mosaic loaded from `values` (see [`EditorMosaic::set`])
    pub fn with_values(
        values: impl IntoIterator<Item = (EditorId, String)>,
        direction: SplitDirection,
        hide_empty: bool,
    ) -> Self {
        let mut mosaic = Self::new(direction);
        mosaic.set(values, hide_empty);
        mosaic
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Editors in insertion order
    pub fn entries(&self) -> &[EditorEntry] {
        &self.entries
    }

    /// `(id, state)` pairs in insertion order
    pub fn states(&self) -> impl Iterator<Item = (&EditorId, EditorState)> {
        self.entries.iter().map(|e| (&e.id, e.state))
    }

    pub fn ids(&self) -> impl Iterator<Item = &EditorId> {
        self.entries.iter().map(|e| &e.id)
    }

    pub fn contains(&self, id: &EditorId) -> bool {
        self.entry(id).is_some()
    }

    pub fn state(&self, id: &EditorId) -> Option<EditorState> {
        self.entry(id).map(|e| e.state)
    }

    pub fn content(&self, id: &EditorId) -> Option<&str> {
        self.entry(id).map(|e| e.content.as_str())
    }

    /// Contents of every editor, keyed by id
    pub fn values(&self) -> BTreeMap<EditorId, String> {
        self.entries
            .iter()
            .map(|e| (e.id.clone(), e.content.clone()))
            .collect()
    }

    /// Number of visible editors, i.e. panels in the layout
    pub fn mosaic_leaf_count(&self) -> usize {
        self.entries.iter().filter(|e| e.state.is_visible()).count()
    }

    /// Visible editor ids in insertion order
    pub fn visible_ids(&self) -> Vec<EditorId> {
        self.entries
            .iter()
            .filter(|e| e.state.is_visible())
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn layout(&self) -> &MosaicNode {
        &self.layout
    }

    /// Incremented every time the layout is recomputed or changed
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Whether editors changed since the last load or save
    pub fn is_edited(&self) -> bool {
        self.is_edited
    }

    pub fn mark_saved(&mut self) {
        self.is_edited = false;
    }

    /// Panel rects for the current layout
    pub fn compute_layout(&self, available: Rect) -> LayoutView {
        compute_layout(&self.layout, available, SPLITTER_WIDTH)
    }

    fn entry(&self, id: &EditorId) -> Option<&EditorEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    fn position(&self, id: &EditorId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    // =========================================================================
    // Registry mutations
    // =========================================================================

    /// Add a new visible editor
    pub fn add(&mut self, id: EditorId, content: impl Into<String>) -> Result<(), MosaicError> {
        if self.contains(&id) {
            return Err(MosaicError::DuplicateIdentifier(id));
        }

        tracing::debug!(target: "mosaic", %id, "add editor");
        self.entries.push(EditorEntry {
            id: id.clone(),
            content: content.into(),
            state: EditorState::Visible,
        });
        self.is_edited = true;
        self.recompute_layout();
        self.notify(MosaicEvent::Added(id));
        Ok(())
    }

    /// Remove an editor. `main.js` is protected.
    pub fn remove(&mut self, id: &EditorId) -> Result<(), MosaicError> {
        if id.is_main() {
            return Err(MosaicError::ProtectedIdentifier(id.clone()));
        }
        let index = self
            .position(id)
            .ok_or_else(|| MosaicError::NotFound(id.clone()))?;

        tracing::debug!(target: "mosaic", %id, "remove editor");
        self.entries.remove(index);

        // Removing the last visible panel brings back the main editor
        if self.mosaic_leaf_count() == 0 {
            self.ensure_one_visible();
        }

        self.is_edited = true;
        self.recompute_layout();
        self.notify(MosaicEvent::Removed(id.clone()));
        Ok(())
    }

    /// Flip an editor between visible and hidden.
    ///
    /// Refused without any change when `id` is the only visible editor.
    pub fn toggle(&mut self, id: &EditorId) -> Result<EditorState, MosaicError> {
        let index = self
            .position(id)
            .ok_or_else(|| MosaicError::NotFound(id.clone()))?;

        let current = self.entries[index].state;
        if current.is_visible() && self.mosaic_leaf_count() < 2 {
            tracing::debug!(target: "mosaic", %id, "refusing to hide last visible editor");
            return Err(MosaicError::LastVisible(id.clone()));
        }

        let state = current.flipped();
        self.entries[index].state = state;
        tracing::debug!(target: "mosaic", %id, ?state, "toggle editor");

        self.recompute_layout();
        self.notify(MosaicEvent::Toggled {
            id: id.clone(),
            state,
        });
        Ok(state)
    }

    /// Make an editor visible; no-op if it already is
    pub fn show(&mut self, id: &EditorId) -> Result<(), MosaicError> {
        match self.state(id) {
            None => Err(MosaicError::NotFound(id.clone())),
            Some(EditorState::Visible) => Ok(()),
            Some(EditorState::Hidden) => self.toggle(id).map(|_| ()),
        }
    }

    /// Hide an editor; no-op if it already is hidden
    pub fn hide(&mut self, id: &EditorId) -> Result<(), MosaicError> {
        match self.state(id) {
            None => Err(MosaicError::NotFound(id.clone())),
            Some(EditorState::Hidden) => Ok(()),
            Some(EditorState::Visible) => self.toggle(id).map(|_| ()),
        }
    }

    /// Replace an editor's content (from the editing surface)
    pub fn set_content(&mut self, id: &EditorId, content: impl Into<String>) -> Result<(), MosaicError> {
        let index = self
            .position(id)
            .ok_or_else(|| MosaicError::NotFound(id.clone()))?;

        let content = content.into();
        if self.entries[index].content == content {
            return Ok(());
        }
        self.entries[index].content = content;
        self.is_edited = true;
        self.notify(MosaicEvent::ContentChanged(id.clone()));
        Ok(())
    }

    /// Replace every editor, e.g. when a project is opened.
    ///
    /// Default files come first in their usual order, then the rest by name.
    /// With `hide_empty`, blank editors start hidden. `main.js` is always present.
    pub fn set(&mut self, values: impl IntoIterator<Item = (EditorId, String)>, hide_empty: bool) {
        let mut entries: Vec<EditorEntry> = Vec::new();
        for (id, content) in values {
            if let Some(existing) = entries.iter_mut().find(|e| e.id == id) {
                existing.content = content;
                continue;
            }
            let state = if hide_empty && content.trim().is_empty() {
                EditorState::Hidden
            } else {
                EditorState::Visible
            };
            entries.push(EditorEntry { id, content, state });
        }

        if !entries.iter().any(|e| e.id.is_main()) {
            let state = if hide_empty {
                EditorState::Hidden
            } else {
                EditorState::Visible
            };
            entries.push(EditorEntry {
                id: EditorId::main(),
                content: String::new(),
                state,
            });
        }

        entries.sort_by(|a, b| match (a.id.default_rank(), b.id.default_rank()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });

        self.entries = entries;
        self.ensure_one_visible();
        self.is_edited = false;
        tracing::debug!(target: "mosaic", editors = self.entries.len(), "replaced editors");

        self.install_canonical_layout();
        self.notify(MosaicEvent::Replaced);
    }

    fn ensure_one_visible(&mut self) {
        if self.mosaic_leaf_count() > 0 {
            return;
        }
        let index = self.position(&EditorId::main()).unwrap_or(0);
        if let Some(entry) = self.entries.get_mut(index) {
            entry.state = EditorState::Visible;
        }
    }

    // =========================================================================
    // Layout coordination
    // =========================================================================

    /// Discard any custom arrangement and tile the visible editors canonically
    pub fn reset_layout(&mut self) {
        tracing::debug!(target: "mosaic", "reset layout");
        self.install_canonical_layout();
        self.notify(MosaicEvent::LayoutReset);
    }

    /// Accept a rearranged tree from the mosaic surface.
    ///
    /// Its leaves must be exactly the visible editors, each once.
    pub fn set_layout(&mut self, mut layout: MosaicNode) -> Result<(), MosaicError> {
        layout.normalize();

        let mut leaves: Vec<&EditorId> = layout.leaves();
        leaves.sort();
        let total = leaves.len();
        leaves.dedup();
        if leaves.len() != total {
            return Err(MosaicError::InvalidLayout(
                "an editor appears more than once".to_string(),
            ));
        }

        let mut visible = self.visible_ids();
        visible.sort();
        if leaves.into_iter().ne(visible.iter()) {
            return Err(MosaicError::InvalidLayout(
                "panels do not match the visible editors".to_string(),
            ));
        }

        self.layout = layout;
        self.layout_revision += 1;
        self.notify(MosaicEvent::LayoutChanged);
        Ok(())
    }

    /// Resize the children of the split at `path` (child indices from the root)
    pub fn resize_split(&mut self, path: &[usize], ratios: Vec<f32>) -> Result<(), MosaicError> {
        let container = self
            .layout
            .split_at_path_mut(path)
            .ok_or_else(|| MosaicError::InvalidLayout(format!("no split at {:?}", path)))?;

        if ratios.len() != container.children.len() || !valid_ratios(&ratios) {
            return Err(MosaicError::InvalidLayout(format!(
                "expected {} finite non-negative ratios",
                container.children.len()
            )));
        }

        let sum: f32 = ratios.iter().sum();
        container.ratios = ratios.into_iter().map(|r| r / sum).collect();
        self.layout_revision += 1;
        self.notify(MosaicEvent::LayoutChanged);
        Ok(())
    }

    fn recompute_layout(&mut self) {
        let visible = self.visible_ids();
        reconcile(&mut self.layout, &visible, self.direction);
        self.layout_revision += 1;
        self.assert_invariants();
    }

    fn install_canonical_layout(&mut self) {
        let visible = self.visible_ids();
        self.layout = canonical_arrangement(&visible, self.direction);
        self.layout_revision += 1;
        self.assert_invariants();
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback run after every successful mutation
    pub fn subscribe(&mut self, callback: impl FnMut(&EditorMosaic, &MosaicEvent) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Returns true if the subscription was still registered
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }

    fn notify(&mut self, event: MosaicEvent) {
        if self.observers.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        for (_, callback) in &mut observers {
            callback(self, &event);
        }
        self.observers = observers;
    }

    // =========================================================================
    // Debug Invariant Validation
    // =========================================================================

    /// Validate internal invariants in debug builds.
    ///
    /// Panics if ids are not unique, nothing is visible, `main.js` is missing,
    /// or the layout does not hold exactly the visible editors.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let mut ids: Vec<&EditorId> = self.ids().collect();
        ids.sort();
        let total = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate editor ids: {:?}", self.entries);
        assert!(
            self.entries.iter().any(|e| e.id.is_main()),
            "main.js missing from {:?}",
            self.entries
        );
        assert!(self.mosaic_leaf_count() > 0, "no visible editor");

        let mut leaves: Vec<&EditorId> = self.layout.leaves();
        leaves.sort();
        let mut visible = self.visible_ids();
        visible.sort();
        assert!(
            leaves.into_iter().eq(visible.iter()),
            "layout {:?} does not match visible editors {:?}",
            self.layout,
            visible
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
