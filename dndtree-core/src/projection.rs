//! Drop-position projection for dragging rows of a sortable tree.
//!
//! While a row is dragged, the list it moves through is the visible rows
//! without the dragged row's own descendants (see [`drag_items`]). The row
//! the pointer is over decides the new position, the horizontal pointer
//! offset decides the new depth, clamped so the result is always a valid
//! tree. [`apply_projection`] turns the final projection into a new tree.

use std::collections::{HashMap, HashSet};

use crate::node::TreeNode;
use crate::record::NodeId;
use crate::visibility::{
    FlattenedNode, collapsed_ids, flatten_tree, remove_children_of,
};

/// Where the dragged row would land if dropped now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub depth: usize,
    pub min_depth: usize,
    pub max_depth: usize,
    pub parent_id: Option<NodeId>,
}

/// Whole indentation levels covered by a horizontal offset.
pub fn drag_depth(offset_x: f32, indentation_width: f32) -> isize {
    if !offset_x.is_finite()
        || !indentation_width.is_finite()
        || indentation_width <= 0.0
    {
        return 0;
    }

    (offset_x / indentation_width).round() as isize
}

/// Rows a dragged node moves through: visible rows minus the dragged
/// node's descendants.
pub fn drag_items<'a>(
    tree: &'a [TreeNode],
    active_id: &str,
) -> Vec<FlattenedNode<'a>> {
    let flattened = flatten_tree(tree);
    let mut excluded: Vec<&str> = collapsed_ids(&flattened);
    excluded.push(active_id);
    remove_children_of(flattened, &excluded)
}

/// Project the drop position of `active_id` over `over_id`.
///
/// `items` is the drag list from [`drag_items`]. Returns `None` when either
/// id is missing from it.
pub fn project_drop(
    items: &[FlattenedNode<'_>],
    active_id: &str,
    over_id: &str,
    offset_x: f32,
    indentation_width: f32,
) -> Option<Projection> {
    let over_index = items.iter().position(|item| item.id() == over_id)?;
    let active_index = items.iter().position(|item| item.id() == active_id)?;
    let active_depth = items[active_index].depth;

    let moved = array_move(items.to_vec(), active_index, over_index);
    let previous = over_index.checked_sub(1).and_then(|index| moved.get(index));
    let next = moved.get(over_index + 1);

    let max_depth = previous.map(|item| item.depth + 1).unwrap_or(0);
    let min_depth = next.map(|item| item.depth).unwrap_or(0);
    let projected =
        active_depth as isize + drag_depth(offset_x, indentation_width);
    let depth = if projected >= max_depth as isize {
        max_depth
    } else if projected < min_depth as isize {
        min_depth
    } else {
        projected as usize
    };

    let parent_id = match previous {
        _ if depth == 0 => None,
        None => None,
        Some(previous) if depth == previous.depth => {
            previous.parent_id.map(str::to_owned)
        },
        Some(previous) if depth > previous.depth => {
            Some(previous.id().to_owned())
        },
        Some(_) => moved[..over_index]
            .iter()
            .rev()
            .find(|item| item.depth == depth)
            .and_then(|item| item.parent_id)
            .map(str::to_owned),
    };

    Some(Projection {
        depth,
        min_depth,
        max_depth,
        parent_id,
    })
}

/// Drag list rearranged to show the dragged row at its projected slot and
/// depth.
pub fn preview_rows<'a>(
    items: Vec<FlattenedNode<'a>>,
    active_id: &str,
    over_id: &str,
    projection: &Projection,
) -> Vec<FlattenedNode<'a>> {
    let active_index = items.iter().position(|item| item.id() == active_id);
    let over_index = items.iter().position(|item| item.id() == over_id);
    let (Some(active_index), Some(over_index)) = (active_index, over_index)
    else {
        return items;
    };

    let parent_id = projection.parent_id.as_deref().and_then(|parent| {
        items
            .iter()
            .find(|item| item.id() == parent)
            .map(FlattenedNode::id)
    });

    let mut rows = array_move(items, active_index, over_index);
    if let Some(row) = rows.get_mut(over_index) {
        row.depth = projection.depth;
        row.parent_id = parent_id;
    }
    rows
}

/// Move `active_id` to the slot of `over_id` under the projected parent and
/// rebuild the nested tree.
///
/// Descendants of the moved node keep following it. Returns an unchanged
/// copy of the tree when either id is unknown.
pub fn apply_projection(
    tree: &[TreeNode],
    active_id: &str,
    over_id: &str,
    projection: &Projection,
) -> Vec<TreeNode> {
    let flattened = flatten_tree(tree);
    let active_index = flattened.iter().position(|item| item.id() == active_id);
    let over_index = flattened.iter().position(|item| item.id() == over_id);
    let (Some(active_index), Some(over_index)) = (active_index, over_index)
    else {
        return tree.to_vec();
    };

    let mut entries: Vec<MoveEntry<'_>> = flattened
        .iter()
        .map(|item| MoveEntry {
            node: item.node,
            parent_id: item.parent_id.map(str::to_owned),
        })
        .collect();
    entries[active_index].parent_id = projection.parent_id.clone();

    build_from_entries(&array_move(entries, active_index, over_index))
}

struct MoveEntry<'a> {
    node: &'a TreeNode,
    parent_id: Option<NodeId>,
}

fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
    items
}

fn build_from_entries(entries: &[MoveEntry<'_>]) -> Vec<TreeNode> {
    let known: HashSet<&str> =
        entries.iter().map(|entry| entry.node.id.as_str()).collect();

    let mut children: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        let parent = entry
            .parent_id
            .as_deref()
            .filter(|parent| known.contains(parent));
        if parent.is_none() && entry.parent_id.is_some() {
            log::debug!(
                "node {} moved to the root: parent is unknown",
                entry.node.id
            );
        }
        children.entry(parent).or_default().push(index);
    }

    let mut placed = vec![false; entries.len()];
    assemble_level(None, entries, &children, &mut placed)
}

fn assemble_level(
    parent: Option<&str>,
    entries: &[MoveEntry<'_>],
    children: &HashMap<Option<&str>, Vec<usize>>,
    placed: &mut [bool],
) -> Vec<TreeNode> {
    let Some(indices) = children.get(&parent) else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(indices.len());
    for &index in indices {
        if placed[index] {
            continue;
        }
        placed[index] = true;

        let entry = &entries[index];
        let mut node = entry.node.detached();
        node.children =
            assemble_level(Some(&entry.node.id), entries, children, placed);
        nodes.push(node);
    }
    nodes
}
