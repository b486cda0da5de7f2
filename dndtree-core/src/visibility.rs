use std::collections::HashSet;

use crate::node::TreeNode;

/// Depth-first entry of a tree, borrowed from the projected nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenedNode<'a> {
    /// Borrowed source node.
    pub node: &'a TreeNode,
    /// Id of the enclosing node, `None` at the root level.
    pub parent_id: Option<&'a str>,
    /// Zero-based depth (`0` for root-level rows).
    pub depth: usize,
    /// Position among siblings.
    pub index: usize,
}

impl<'a> FlattenedNode<'a> {
    pub fn id(&self) -> &'a str {
        &self.node.id
    }

    pub fn collapsed(&self) -> bool {
        self.node.collapsed
    }

    pub fn children(&self) -> &'a [TreeNode] {
        &self.node.children
    }
}

/// Flatten a tree into a depth-first, pre-order list of every node.
pub fn flatten_tree(nodes: &[TreeNode]) -> Vec<FlattenedNode<'_>> {
    let mut entries = Vec::new();
    push_level(nodes, None, 0, &mut entries);
    entries
}

fn push_level<'a>(
    nodes: &'a [TreeNode],
    parent_id: Option<&'a str>,
    depth: usize,
    entries: &mut Vec<FlattenedNode<'a>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        entries.push(FlattenedNode {
            node,
            parent_id,
            depth,
            index,
        });
        push_level(&node.children, Some(&node.id), depth + 1, entries);
    }
}

/// Drop every entry that descends from one of `ids`.
///
/// The entries named in `ids` stay; their descendants go. Expects the
/// pre-order produced by [`flatten_tree`].
pub fn remove_children_of<'a>(
    items: Vec<FlattenedNode<'a>>,
    ids: &[&str],
) -> Vec<FlattenedNode<'a>> {
    let mut excluded: HashSet<&str> = ids.iter().copied().collect();
    items
        .into_iter()
        .filter(|item| match item.parent_id {
            Some(parent) if excluded.contains(parent) => {
                if !item.children().is_empty() {
                    excluded.insert(item.id());
                }
                false
            },
            _ => true,
        })
        .collect()
}

/// Ids of collapsed entries that have children.
pub fn collapsed_ids<'a>(items: &[FlattenedNode<'a>]) -> Vec<&'a str> {
    items
        .iter()
        .filter(|item| item.collapsed() && !item.children().is_empty())
        .map(FlattenedNode::id)
        .collect()
}

/// Rows currently rendered: the flattened tree without the descendants of
/// collapsed nodes.
pub fn visible_nodes(nodes: &[TreeNode]) -> Vec<FlattenedNode<'_>> {
    let flattened = flatten_tree(nodes);
    let collapsed = collapsed_ids(&flattened);
    remove_children_of(flattened, &collapsed)
}

/// Position of `id` among the visible rows.
pub fn visible_index_of(nodes: &[TreeNode], id: &str) -> Option<usize> {
    visible_nodes(nodes).iter().position(|entry| entry.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::build_tree;
    use crate::record::{ExpandedSet, Record};

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("1", None),
            Record::new("2", None),
            Record::new("3", Some("2")),
            Record::new("4", Some("2")),
            Record::new("5", Some("3")),
            Record::new("6", Some("3")),
            Record::new("7", None),
        ]
    }

    fn expanded(ids: &[&str]) -> ExpandedSet {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    fn flat_ids<'a>(entries: &[FlattenedNode<'a>]) -> Vec<&'a str> {
        entries.iter().map(FlattenedNode::id).collect()
    }

    #[test]
    fn given_tree_when_flattened_then_pre_order_with_depth_parent_and_index() {
        let tree = build_tree(&sample_records(), &ExpandedSet::new());

        let entries = flatten_tree(&tree);

        assert_eq!(flat_ids(&entries), vec!["1", "2", "3", "5", "6", "4", "7"]);
        let five = entries[3];
        assert_eq!(five.depth, 2);
        assert_eq!(five.parent_id, Some("3"));
        assert_eq!(five.index, 0);
        let four = entries[5];
        assert_eq!(four.depth, 1);
        assert_eq!(four.index, 1);
        assert_eq!(entries[6].parent_id, None);
        assert_eq!(entries[6].index, 2);
    }

    #[test]
    fn given_collapsed_root_when_filtered_then_descendants_are_hidden() {
        let records = vec![
            Record::new("a", None),
            Record::new("b", Some("a")),
            Record::new("c", Some("b")),
        ];
        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(flat_ids(&visible_nodes(&tree)), vec!["a"]);
    }

    #[test]
    fn given_expanded_parent_with_collapsed_child_when_filtered_then_grandchildren_hidden()
     {
        let tree = build_tree(&sample_records(), &expanded(&["2"]));

        assert_eq!(
            flat_ids(&visible_nodes(&tree)),
            vec!["1", "2", "3", "4", "7"]
        );
    }

    #[test]
    fn given_fully_expanded_tree_when_filtered_then_everything_is_visible() {
        let tree = build_tree(&sample_records(), &expanded(&["2", "3"]));

        assert_eq!(visible_nodes(&tree).len(), 7);
        assert_eq!(visible_index_of(&tree, "6"), Some(4));
        assert_eq!(visible_index_of(&tree, "missing"), None);
    }

    #[test]
    fn given_explicit_ids_when_removing_children_then_named_rows_stay() {
        let tree = build_tree(&sample_records(), &expanded(&["2", "3"]));

        let rows = remove_children_of(flatten_tree(&tree), &["3"]);

        assert_eq!(flat_ids(&rows), vec!["1", "2", "3", "4", "7"]);
    }

    #[test]
    fn given_hidden_row_when_looking_up_index_then_none_is_returned() {
        let tree = build_tree(&sample_records(), &expanded(&["2"]));

        assert_eq!(visible_index_of(&tree, "5"), None);
        assert_eq!(visible_index_of(&tree, "4"), Some(3));
    }
}
