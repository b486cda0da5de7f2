use std::collections::{HashMap, HashSet};

use crate::record::{NodeId, Record};

/// The target id plus the ids of all its transitive descendants.
///
/// Descendants are found through a parent to children adjacency map, so
/// the cost is linear in the number of records. The target does not need to
/// exist: records pointing at a missing target still count as its children.
pub fn removal_set(records: &[Record], target: &str) -> HashSet<NodeId> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in records {
        if let Some(parent) = record.parent_id.as_deref() {
            children.entry(parent).or_default().push(&record.id);
        }
    }

    let mut removed: HashSet<NodeId> = HashSet::new();
    let mut pending: Vec<&str> = vec![target];
    while let Some(id) = pending.pop() {
        if !removed.insert(id.to_owned()) {
            continue;
        }
        if let Some(child_ids) = children.get(id) {
            pending.extend(child_ids.iter().copied());
        }
    }

    removed
}

/// Records left after removing `target` and its descendants, in their
/// original order.
pub fn remove_subtree(records: &[Record], target: &str) -> Vec<Record> {
    let removed = removal_set(records, target);
    records
        .iter()
        .filter(|record| !removed.contains(&record.id))
        .cloned()
        .collect()
}
