use dndtree_core::{NodeId, Record};
use iced::Point;

/// Intent events handled by the editor reducer.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Left press on a row; arms a drag candidate.
    RowPressed { id: NodeId },
    /// Pointer moved over the tree, in viewport coordinates.
    PointerMoved { position: Point },
    /// Left button released anywhere over the tree.
    PointerReleased,
    /// Pointer left the tree area.
    PointerLeft,
    /// Collapse toggle of a row was clicked.
    ToggleCollapsed { id: NodeId },
    /// Remove button of a row was clicked.
    RemovePressed { id: NodeId },
    /// The tree list was scrolled or resized.
    Scrolled { offset_y: f32, viewport_height: f32 },
}

/// Effects produced by the editor reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEffect {
    /// New record list after a drop, toggle or removal.
    ItemsChanged(Vec<Record>),
    /// Selection changed; `None` clears it.
    Selected(Option<NodeId>),
    /// Removal requested while removal is delegated to the host.
    Removed(NodeId),
    /// Scroll the tree list to a vertical offset.
    ScrollTo { offset_y: f32 },
}

/// Editor event stream routed through the host update loop.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// Intent event reduced by the editor.
    Intent(EditorIntent),
    /// Output for the host.
    Effect(EditorEffect),
}
