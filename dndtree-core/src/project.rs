use std::collections::HashMap;

use crate::node::{TreeNode, node_count};
use crate::record::{ExpandedSet, Record};

/// Project flat records into a nested tree.
///
/// Siblings keep the order of the input records. A node is collapsed unless
/// its id is in `expanded`. When ids repeat, the last record wins while the
/// position of the first occurrence is kept. Nodes whose parent id does not
/// resolve, and nodes caught in a parent cycle, are left out together with
/// their subtrees.
pub fn build_tree(records: &[Record], expanded: &ExpandedSet) -> Vec<TreeNode> {
    let mut latest: HashMap<&str, &Record> =
        HashMap::with_capacity(records.len());
    let mut order: Vec<&str> = Vec::with_capacity(records.len());
    for record in records {
        if latest.insert(record.id.as_str(), record).is_none() {
            order.push(record.id.as_str());
        }
    }

    let mut roots: Vec<&str> = Vec::new();
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for &id in &order {
        match latest[id].parent_id.as_deref() {
            None => roots.push(id),
            Some(parent) if latest.contains_key(parent) => {
                children.entry(parent).or_default().push(id);
            },
            Some(parent) => {
                log::debug!("node {id} dropped: parent {parent} is unknown");
            },
        }
    }

    let tree: Vec<TreeNode> = roots
        .into_iter()
        .map(|id| assemble(id, &latest, &children, expanded))
        .collect();

    let projected = node_count(&tree);
    if projected < order.len() {
        log::debug!(
            "tree projection left out {} of {} records",
            order.len() - projected,
            order.len()
        );
    }

    tree
}

fn assemble(
    id: &str,
    latest: &HashMap<&str, &Record>,
    children: &HashMap<&str, Vec<&str>>,
    expanded: &ExpandedSet,
) -> TreeNode {
    let mut node = TreeNode::from_record(latest[id], !expanded.contains(id));
    if let Some(child_ids) = children.get(id) {
        node.children = child_ids
            .iter()
            .map(|child| assemble(child, latest, children, expanded))
            .collect();
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, parent: Option<&str>) -> Record {
        Record::new(id, parent)
    }

    fn ids(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.id.as_str()).collect()
    }

    fn expanded(ids: &[&str]) -> ExpandedSet {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn given_empty_records_when_projected_then_tree_is_empty() {
        assert!(build_tree(&[], &ExpandedSet::new()).is_empty());
    }

    #[test]
    fn given_children_listed_before_parent_when_projected_then_order_follows_records()
     {
        let records = vec![
            record("c2", Some("p")),
            record("p", None),
            record("c1", Some("p")),
            record("r", None),
        ];

        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(ids(&tree), vec!["p", "r"]);
        assert_eq!(ids(&tree[0].children), vec!["c2", "c1"]);
    }

    #[test]
    fn given_expanded_set_when_projected_then_collapsed_flags_follow_it() {
        let records = vec![record("a", None), record("b", Some("a"))];

        let tree = build_tree(&records, &expanded(&["a"]));

        assert!(!tree[0].collapsed);
        assert!(tree[0].children[0].collapsed);
    }

    #[test]
    fn given_unknown_parent_when_projected_then_subtree_is_dropped() {
        let records = vec![
            record("a", None),
            record("orphan", Some("ghost")),
            record("orphan-child", Some("orphan")),
        ];

        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(ids(&tree), vec!["a"]);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn given_duplicate_ids_when_projected_then_last_record_wins_once() {
        let records = vec![
            record("a", None),
            record("x", None).with_label("first"),
            record("b", None),
            record("x", Some("a")).with_label("second"),
        ];

        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(ids(&tree), vec!["a", "b"]);
        assert_eq!(ids(&tree[0].children), vec!["x"]);
        assert_eq!(tree[0].children[0].label, "second");
    }

    #[test]
    fn given_parent_cycle_when_projected_then_cycle_is_left_out() {
        let records = vec![
            record("root", None),
            record("a", Some("b")),
            record("b", Some("a")),
            record("self", Some("self")),
        ];

        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(ids(&tree), vec!["root"]);
        assert_eq!(node_count(&tree), 1);
    }

    #[test]
    fn given_record_without_label_when_projected_then_label_is_id() {
        let records =
            vec![record("a", None), record("b", None).with_label("B")];

        let tree = build_tree(&records, &ExpandedSet::new());

        assert_eq!(tree[0].label, "a");
        assert_eq!(tree[1].label, "B");
        assert_eq!(tree[1].data, records[1]);
    }
}
