use dndtree_core::{
    NodeId, Record, TreeNode, apply_projection, drag_items, project_drop,
    reconcile, removal_set, remove_subtree, set_collapsed, visible_index_of,
    visible_nodes,
};
use dndtree_ui_tree::{nearest_offset, row_at, row_top};
use iced::Point;

use super::event::{EditorEffect, EditorIntent};
use super::props::EditorProps;
use super::state::{DragState, DropTarget, EditorState, Viewport};
use super::view::ROW_HEIGHT;

/// Pointer travel that turns a press into a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Reduce an editor intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut EditorState,
    props: &EditorProps,
    intent: EditorIntent,
) -> Vec<EditorEffect> {
    match intent {
        EditorIntent::RowPressed { id } => {
            state.set_drag(Some(DragState {
                source: id,
                origin: state.cursor(),
                active: false,
                target: None,
            }));
            Vec::new()
        },
        EditorIntent::PointerMoved { position } => {
            let offset_y = state.viewport().offset_y;
            state.set_cursor(Point::new(position.x, position.y + offset_y));
            if state.drag().is_some() {
                update_drag(state, props);
            } else {
                update_hover(state);
            }
            Vec::new()
        },
        EditorIntent::PointerReleased => finish_drag(state, props),
        EditorIntent::PointerLeft => {
            state.set_drag(None);
            state.set_hovered(None);
            Vec::new()
        },
        EditorIntent::ToggleCollapsed { id } => {
            if !props.collapsible {
                return Vec::new();
            }
            toggle_collapsed(state, &id)
        },
        EditorIntent::RemovePressed { id } => {
            if !props.removable {
                return Vec::new();
            }
            remove_node(state, props, id)
        },
        EditorIntent::Scrolled {
            offset_y,
            viewport_height,
        } => {
            state.set_viewport(Viewport {
                offset_y,
                height: viewport_height,
            });
            Vec::new()
        },
    }
}

/// Replace the records supplied by the host.
pub(crate) fn set_items(
    state: &mut EditorState,
    props: &EditorProps,
    items: Vec<Record>,
) -> Vec<EditorEffect> {
    state.set_items(items);
    let _ = state.expand_to_target();
    scroll_request(state, props).into_iter().collect()
}

/// Replace the selection supplied by the host.
pub(crate) fn set_selected_id(
    state: &mut EditorState,
    props: &EditorProps,
    id: Option<NodeId>,
) -> Vec<EditorEffect> {
    state.set_selected(id);
    scroll_request(state, props).into_iter().collect()
}

/// Expand the ancestors of `id` so it becomes visible.
pub(crate) fn set_expand_to_id(
    state: &mut EditorState,
    props: &EditorProps,
    id: Option<NodeId>,
) -> Vec<EditorEffect> {
    state.set_expand_to(id);
    let _ = state.expand_to_target();
    scroll_request(state, props).into_iter().collect()
}

/// Scroll offset that brings the selected or expanded-to row into view.
pub(crate) fn scroll_request(
    state: &EditorState,
    props: &EditorProps,
) -> Option<EditorEffect> {
    if !props.scroll_to_selected {
        return None;
    }

    let target = state.selected_id().or(state.expand_to_id())?;
    let index = visible_index_of(state.tree(), target)?;
    let viewport = state.viewport();
    nearest_offset(
        viewport.offset_y,
        viewport.height,
        row_top(index, ROW_HEIGHT, 0.0),
        ROW_HEIGHT,
    )
    .map(|offset_y| EditorEffect::ScrollTo { offset_y })
}

fn update_hover(state: &mut EditorState) {
    let cursor = state.cursor();
    let hovered = {
        let rows = visible_nodes(state.tree());
        row_at(cursor.y, ROW_HEIGHT, 0.0, rows.len())
            .map(|index| rows[index].id().to_owned())
    };
    state.set_hovered(hovered);
}

fn update_drag(state: &mut EditorState, props: &EditorProps) {
    let cursor = state.cursor();
    let (source, origin) = {
        let Some(drag) = state.drag_mut() else {
            return;
        };
        if !drag.active && drag.origin.distance(cursor) >= DRAG_THRESHOLD {
            drag.active = true;
        }
        if !drag.active {
            return;
        }
        (drag.source.clone(), drag.origin)
    };

    let target = {
        let items = drag_items(state.tree(), &source);
        row_at(cursor.y, ROW_HEIGHT, 0.0, items.len()).and_then(|index| {
            let over = items[index].id();
            project_drop(
                &items,
                &source,
                over,
                cursor.x - origin.x,
                props.indentation(),
            )
            .map(|projection| DropTarget {
                over: over.to_owned(),
                projection,
            })
        })
    };

    state.set_hovered(None);
    if let Some(drag) = state.drag_mut() {
        drag.target = target;
    }
}

fn finish_drag(
    state: &mut EditorState,
    props: &EditorProps,
) -> Vec<EditorEffect> {
    let Some(drag) = state.take_drag() else {
        return Vec::new();
    };
    if !drag.active {
        return click_row(state, props, drag.source);
    }
    let Some(target) = drag.target else {
        return Vec::new();
    };

    let tree = apply_projection(
        state.tree(),
        &drag.source,
        &target.over,
        &target.projection,
    );
    commit_tree(state, tree)
}

fn click_row(
    state: &mut EditorState,
    props: &EditorProps,
    id: NodeId,
) -> Vec<EditorEffect> {
    let selected = if state.selected_id() == Some(id.as_str()) {
        None
    } else {
        Some(id)
    };
    state.set_selected(selected.clone());

    let mut effects = vec![EditorEffect::Selected(selected)];
    effects.extend(scroll_request(state, props));
    effects
}

fn toggle_collapsed(state: &mut EditorState, id: &str) -> Vec<EditorEffect> {
    let mut tree = state.tree().to_vec();
    if !set_collapsed(&mut tree, id, |collapsed| !collapsed) {
        return Vec::new();
    }

    commit_tree(state, tree)
}

/// Reconcile an edited tree into the state and report changed records.
fn commit_tree(
    state: &mut EditorState,
    tree: Vec<TreeNode>,
) -> Vec<EditorEffect> {
    let change = reconcile(&tree, state.items());
    let changed = change.items != state.items();
    state.apply_change(change);

    if !changed {
        return Vec::new();
    }
    vec![EditorEffect::ItemsChanged(state.items().to_vec())]
}

fn remove_node(
    state: &mut EditorState,
    props: &EditorProps,
    id: NodeId,
) -> Vec<EditorEffect> {
    if props.delegate_removal {
        return vec![EditorEffect::Removed(id)];
    }

    let removed = removal_set(state.items(), &id);
    let remaining = remove_subtree(state.items(), &id);
    log::debug!("removing {} records under {id}", removed.len());

    state.set_items(remaining);
    let mut effects =
        vec![EditorEffect::ItemsChanged(state.items().to_vec())];

    let selection_removed = state
        .selected_id()
        .map(|selected| removed.contains(selected))
        .unwrap_or(false);
    if selection_removed {
        state.set_selected(None);
        effects.push(EditorEffect::Selected(None));
    }
    effects
}
