use crate::record::{NodeId, Record};

/// Nested node projected from a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,
    pub children: Vec<TreeNode>,
    pub collapsed: bool,
    pub label: String,
    /// Record the node was projected from.
    pub data: Record,
}

impl TreeNode {
    /// Build a childless node from a record.
    pub fn from_record(record: &Record, collapsed: bool) -> Self {
        Self {
            id: record.id.clone(),
            children: Vec::new(),
            collapsed,
            label: record.display_label().to_owned(),
            data: record.clone(),
        }
    }

    /// Copy of the node without its children.
    pub(crate) fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            children: Vec::new(),
            collapsed: self.collapsed,
            label: self.label.clone(),
            data: self.data.clone(),
        }
    }

    /// Whether the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Depth-first search for a node by id.
pub fn find_node<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }

    None
}

fn find_node_mut<'a>(
    nodes: &'a mut [TreeNode],
    id: &str,
) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }

    None
}

/// Whether any node in the tree carries `id`.
pub fn contains(nodes: &[TreeNode], id: &str) -> bool {
    find_node(nodes, id).is_some()
}

/// Rewrite the `collapsed` flag of a node.
///
/// Returns `false` when the id is not in the tree.
pub fn set_collapsed(
    nodes: &mut [TreeNode],
    id: &str,
    update: impl FnOnce(bool) -> bool,
) -> bool {
    let Some(node) = find_node_mut(nodes, id) else {
        return false;
    };

    node.collapsed = update(node.collapsed);
    true
}

/// Number of descendants of the node with `id`, or `0` when absent.
pub fn descendant_count(nodes: &[TreeNode], id: &str) -> usize {
    find_node(nodes, id)
        .map(TreeNode::descendant_count)
        .unwrap_or(0)
}

/// Total number of nodes in the tree.
pub fn node_count(nodes: &[TreeNode]) -> usize {
    nodes.iter().map(|node| 1 + node.descendant_count()).sum()
}
