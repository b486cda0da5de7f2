use std::collections::HashMap;

use crate::record::{ExpandedSet, NodeId, Record};

/// Ids of the ancestors of `target`, nearest parent first.
///
/// The walk is best effort: it stops after `records.len() + 1` ids so a
/// parent cycle yields a truncated list instead of an error. A parent id
/// that matches no record is still reported, and ends the walk.
pub fn ancestor_ids(records: &[Record], target: &str) -> Vec<NodeId> {
    let parent_by_id: HashMap<&str, Option<&str>> = records
        .iter()
        .map(|record| (record.id.as_str(), record.parent_id.as_deref()))
        .collect();

    let limit = records.len() + 1;
    let mut ancestors = Vec::new();
    let mut current = parent_of(&parent_by_id, target);
    while let Some(id) = current {
        if ancestors.len() >= limit {
            log::debug!("ancestor walk from {target} truncated at {limit}");
            break;
        }
        ancestors.push(id.to_owned());
        current = parent_of(&parent_by_id, id);
    }

    ancestors
}

fn parent_of<'a>(
    parent_by_id: &HashMap<&str, Option<&'a str>>,
    id: &str,
) -> Option<&'a str> {
    parent_by_id
        .get(id)
        .copied()
        .flatten()
        .filter(|parent| !parent.is_empty())
}

/// Add the ancestors of `target` to `expanded` so it becomes visible.
///
/// Unknown targets and root targets leave the set untouched. Returns whether
/// the set changed.
pub fn expand_to(
    expanded: &mut ExpandedSet,
    records: &[Record],
    target: &str,
) -> bool {
    if !records.iter().any(|record| record.id == target) {
        return false;
    }

    let mut changed = false;
    for id in ancestor_ids(records, target) {
        changed |= expanded.insert(id);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Record> {
        vec![
            Record::new("a", None),
            Record::new("b", Some("a")),
            Record::new("c", Some("b")),
        ]
    }

    #[test]
    fn given_nested_target_when_resolving_then_ancestors_are_nearest_first() {
        assert_eq!(ancestor_ids(&chain(), "c"), vec!["b", "a"]);
    }

    #[test]
    fn given_root_or_unknown_target_when_resolving_then_list_is_empty() {
        assert!(ancestor_ids(&chain(), "a").is_empty());
        assert!(ancestor_ids(&chain(), "zzz").is_empty());
    }

    #[test]
    fn given_dangling_parent_when_resolving_then_it_ends_the_walk() {
        let records = vec![Record::new("x", Some("ghost"))];

        assert_eq!(ancestor_ids(&records, "x"), vec!["ghost"]);
    }

    #[test]
    fn given_parent_cycle_when_resolving_then_walk_is_bounded() {
        let records =
            vec![Record::new("a", Some("b")), Record::new("b", Some("a"))];

        let ancestors = ancestor_ids(&records, "a");

        assert_eq!(ancestors.len(), records.len() + 1);
        assert_eq!(ancestors[0], "b");
        assert_eq!(ancestors[1], "a");
    }

    #[test]
    fn given_empty_parent_id_when_resolving_then_it_counts_as_root() {
        let records =
            vec![Record::new("a", Some("")), Record::new("b", Some("a"))];

        assert_eq!(ancestor_ids(&records, "b"), vec!["a"]);
    }

    #[test]
    fn given_nested_target_when_expanding_then_ancestors_join_the_set() {
        let mut expanded = ExpandedSet::new();

        assert!(expand_to(&mut expanded, &chain(), "c"));

        let expected: ExpandedSet =
            ["a", "b"].iter().map(|id| (*id).to_owned()).collect();
        assert_eq!(expanded, expected);
        assert!(!expand_to(&mut expanded, &chain(), "c"));
    }

    #[test]
    fn given_unknown_or_root_target_when_expanding_then_set_is_unchanged() {
        let mut expanded = ExpandedSet::new();
        expanded.insert(String::from("keep"));

        assert!(!expand_to(&mut expanded, &chain(), "zzz"));
        assert!(!expand_to(&mut expanded, &chain(), "a"));
        assert_eq!(expanded.len(), 1);
    }
}
