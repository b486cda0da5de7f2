use std::collections::HashMap;

use crate::node::TreeNode;
use crate::record::{ExpandedSet, NodeId, Record};

/// Flat records and expansion state recovered from an edited tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsChange {
    pub items: Vec<Record>,
    pub expanded: ExpandedSet,
}

/// Convert an edited tree back into records and expansion state.
pub fn reconcile(tree: &[TreeNode], originals: &[Record]) -> ItemsChange {
    ItemsChange {
        items: reconcile_items(tree, originals),
        expanded: collect_expanded(tree),
    }
}

/// Flatten an edited tree into records in pre-order.
///
/// Every record takes its parent from the tree. All other fields come from
/// the first original record with the same id; ids unknown to `originals`
/// produce a record carrying only the id and parent.
pub fn reconcile_items(tree: &[TreeNode], originals: &[Record]) -> Vec<Record> {
    let mut by_id: HashMap<&str, &Record> =
        HashMap::with_capacity(originals.len());
    for record in originals {
        by_id.entry(record.id.as_str()).or_insert(record);
    }

    let mut items = Vec::with_capacity(originals.len());
    push_records(tree, None, &by_id, &mut items);
    items
}

fn push_records(
    nodes: &[TreeNode],
    parent_id: Option<&NodeId>,
    by_id: &HashMap<&str, &Record>,
    items: &mut Vec<Record>,
) {
    for node in nodes {
        let mut record = match by_id.get(node.id.as_str()) {
            Some(original) => (*original).clone(),
            None => Record::new(node.id.clone(), None),
        };
        record.parent_id = parent_id.cloned();
        items.push(record);

        push_records(&node.children, Some(&node.id), by_id, items);
    }
}

/// Ids of expanded nodes that have children.
pub fn collect_expanded(tree: &[TreeNode]) -> ExpandedSet {
    let mut expanded = ExpandedSet::new();
    collect_into(tree, &mut expanded);
    expanded
}

fn collect_into(nodes: &[TreeNode], expanded: &mut ExpandedSet) {
    for node in nodes {
        if !node.collapsed && node.has_children() {
            expanded.insert(node.id.clone());
        }
        collect_into(&node.children, expanded);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::project::build_tree;

    fn leaf(id: &str, collapsed: bool) -> TreeNode {
        TreeNode::from_record(&Record::new(id, None), collapsed)
    }

    #[test]
    fn given_reparented_node_when_reconciled_then_parent_and_fields_update() {
        let originals = vec![
            Record::new("a", None).with_label("A"),
            Record::new("b", None)
                .with_label("B")
                .with_field("url", json!("/b")),
        ];
        let mut a = leaf("a", false);
        a.children.push(leaf("b", true));

        let items = reconcile_items(&[a], &originals);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "b");
        assert_eq!(items[1].parent_id.as_deref(), Some("a"));
        assert_eq!(items[1].label.as_deref(), Some("B"));
        assert_eq!(items[1].extra.get("url"), Some(&json!("/b")));
    }

    #[test]
    fn given_unknown_node_when_reconciled_then_minimal_record_is_created() {
        let mut parent = leaf("a", true);
        parent.children.push(leaf("fresh", true));
        let originals = vec![Record::new("a", None).with_label("A")];

        let items = reconcile_items(&[parent], &originals);

        assert_eq!(items[1], Record::new("fresh", Some("a")));
    }

    #[test]
    fn given_tree_when_collecting_expanded_then_only_open_parents_count() {
        let mut open_parent = leaf("open", false);
        open_parent.children.push(leaf("child", false));
        let open_leaf = leaf("open-leaf", false);
        let mut closed_parent = leaf("closed", true);
        closed_parent.children.push(leaf("inner", true));

        let expanded =
            collect_expanded(&[open_parent, open_leaf, closed_parent]);

        let expected: ExpandedSet = [String::from("open")].into();
        assert_eq!(expanded, expected);
    }

    #[test]
    fn given_projected_tree_when_reconciled_then_records_round_trip() {
        let records = vec![
            Record::new("1", None).with_label("Home"),
            Record::new("2", None),
            Record::new("3", Some("2")),
            Record::new("4", Some("2")),
            Record::new("5", Some("3")),
        ];
        let expanded: ExpandedSet =
            [String::from("2"), String::from("3")].into();
        let tree = build_tree(&records, &expanded);

        let change = reconcile(&tree, &records);

        assert_eq!(change.items.len(), records.len());
        for record in &records {
            assert!(change.items.contains(record));
        }
        assert_eq!(change.expanded, expanded);
    }
}
