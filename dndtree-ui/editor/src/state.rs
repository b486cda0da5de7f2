use dndtree_core::{
    ExpandedSet, ItemsChange, NodeId, Projection, Record, TreeNode, build_tree,
    expand_to,
};
use iced::Point;

/// Runtime state of the tree editor.
#[derive(Debug, Default)]
pub(crate) struct EditorState {
    items: Vec<Record>,
    expanded: ExpandedSet,
    tree: Vec<TreeNode>,
    selected: Option<NodeId>,
    expand_to: Option<NodeId>,
    hovered: Option<NodeId>,
    cursor: Point,
    drag: Option<DragState>,
    viewport: Viewport,
}

/// Press on a row that may turn into a drag.
#[derive(Debug, Clone)]
pub(crate) struct DragState {
    pub(crate) source: NodeId,
    pub(crate) origin: Point,
    pub(crate) active: bool,
    pub(crate) target: Option<DropTarget>,
}

/// Row under the pointer and the resulting drop position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DropTarget {
    pub(crate) over: NodeId,
    pub(crate) projection: Projection,
}

/// Last viewport reported by the tree list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) offset_y: f32,
    pub(crate) height: f32,
}

impl EditorState {
    pub(crate) fn new(items: Vec<Record>) -> Self {
        let mut state = Self {
            items,
            ..Self::default()
        };
        state.rebuild();
        state
    }

    // --- Read access ---

    pub(crate) fn items(&self) -> &[Record] {
        &self.items
    }

    pub(crate) fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Nested tree projected from the current items and expansion.
    pub(crate) fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub(crate) fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn expand_to_id(&self) -> Option<&str> {
        self.expand_to.as_deref()
    }

    pub(crate) fn hovered_id(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Pointer position in content coordinates.
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(crate) fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Drag that passed the activation threshold.
    pub(crate) fn active_drag(&self) -> Option<&DragState> {
        self.drag.as_ref().filter(|drag| drag.active)
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    // --- Write access ---

    /// Replace the records. Any drag in progress is dropped.
    pub(crate) fn set_items(&mut self, items: Vec<Record>) {
        self.items = items;
        self.drag = None;
        self.rebuild();
    }

    /// Store reconciled records and expansion.
    pub(crate) fn apply_change(&mut self, change: ItemsChange) {
        self.items = change.items;
        self.expanded = change.expanded;
        self.rebuild();
    }

    pub(crate) fn set_selected(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    pub(crate) fn set_expand_to(&mut self, id: Option<NodeId>) {
        self.expand_to = id;
    }

    /// Expand the ancestors of the expand target.
    ///
    /// Returns `true` when new rows became visible.
    pub(crate) fn expand_to_target(&mut self) -> bool {
        let Some(target) = self.expand_to.as_deref() else {
            return false;
        };
        if !expand_to(&mut self.expanded, &self.items, target) {
            return false;
        }

        self.rebuild();
        true
    }

    pub(crate) fn set_hovered(&mut self, id: Option<NodeId>) {
        self.hovered = id;
    }

    pub(crate) fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    pub(crate) fn set_drag(&mut self, drag: Option<DragState>) {
        self.drag = drag;
    }

    pub(crate) fn drag_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    pub(crate) fn take_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn rebuild(&mut self) {
        self.tree = build_tree(&self.items, &self.expanded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("a", None),
            Record::new("b", Some("a")),
            Record::new("c", Some("b")),
        ]
    }

    #[test]
    fn given_new_state_when_built_then_tree_is_projected_collapsed() {
        let state = EditorState::new(records());

        assert_eq!(state.tree().len(), 1);
        assert!(state.tree()[0].collapsed);
        assert!(state.expanded().is_empty());
    }

    #[test]
    fn given_expand_target_when_expanding_then_ancestors_open() {
        let mut state = EditorState::new(records());
        state.set_expand_to(Some(String::from("c")));

        assert!(state.expand_to_target());
        assert!(!state.tree()[0].collapsed);
        assert!(!state.expand_to_target());
    }

    #[test]
    fn given_drag_in_progress_when_items_replaced_then_drag_is_dropped() {
        let mut state = EditorState::new(records());
        state.set_drag(Some(DragState {
            source: String::from("a"),
            origin: Point::ORIGIN,
            active: true,
            target: None,
        }));

        state.set_items(vec![Record::new("x", None)]);

        assert!(state.drag().is_none());
        assert_eq!(state.tree()[0].id, "x");
    }
}
