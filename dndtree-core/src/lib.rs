//! Flat record to nested tree projection for drag-and-drop tree editors.
//!
//! The crate is UI-agnostic and split into small layers:
//! - records ([`Record`], [`NodeId`], [`ExpandedSet`]) as the host stores
//!   them: a flat list where each entry names its parent;
//! - projection ([`build_tree`]) into nested [`TreeNode`]s, and the way back
//!   ([`reconcile`]) once the nested tree was edited;
//! - visibility helpers ([`flatten_tree`], [`visible_nodes`]) that decide
//!   which rows are rendered;
//! - edit helpers ([`expand_to`], [`remove_subtree`], [`project_drop`],
//!   [`apply_projection`]).
//!
//! The typical round trip of an editor:
//! 1. project the host's records with [`build_tree`];
//! 2. render [`visible_nodes`] of the tree;
//! 3. edit the tree (collapse, drop, remove);
//! 4. hand [`reconcile`] output back to the host.
//!
//! # Quick Example
//!
//! ```
//! use dndtree_core::{
//!     ExpandedSet, Record, build_tree, expand_to, visible_nodes,
//! };
//!
//! let records = vec![
//!     Record::new("a", None),
//!     Record::new("b", Some("a")),
//!     Record::new("c", Some("b")),
//! ];
//!
//! let mut expanded = ExpandedSet::new();
//! let tree = build_tree(&records, &expanded);
//! let ids: Vec<&str> =
//!     visible_nodes(&tree).iter().map(|row| row.id()).collect();
//! assert_eq!(ids, vec!["a"]);
//!
//! expand_to(&mut expanded, &records, "c");
//! let tree = build_tree(&records, &expanded);
//! let ids: Vec<&str> =
//!     visible_nodes(&tree).iter().map(|row| row.id()).collect();
//! assert_eq!(ids, vec!["a", "b", "c"]);
//! ```

mod ancestors;
mod node;
mod project;
mod projection;
mod reconcile;
mod record;
mod removal;
mod visibility;

pub use ancestors::{ancestor_ids, expand_to};
pub use node::{
    TreeNode, contains, descendant_count, find_node, node_count, set_collapsed,
};
pub use project::build_tree;
pub use projection::{
    Projection, apply_projection, drag_depth, drag_items, preview_rows,
    project_drop,
};
pub use reconcile::{ItemsChange, collect_expanded, reconcile, reconcile_items};
pub use record::{ExpandedSet, NodeId, Record};
pub use removal::{remove_subtree, removal_set};
pub use visibility::{
    FlattenedNode, collapsed_ids, flatten_tree, remove_children_of,
    visible_index_of, visible_nodes,
};
