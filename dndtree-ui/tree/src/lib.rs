//! Fixed-height [`iced`] tree rows over flattened [`dndtree_core`] nodes.
//!
//! The crate is split into two layers:
//! - row geometry ([`row_top`], [`row_at`], [`nearest_offset`]) that maps
//!   pointer and scroll positions onto row slots;
//! - view helpers ([`TreeView`], [`TreeRowContext`]) that render rows.
//!
//! Rows are passed in already flattened, so the caller decides which nodes
//! are visible and in what order (for example a drag preview).
//!
//! # Quick Example
//!
//! ```no_run
//! use dndtree_core::{NodeId, TreeNode, visible_nodes};
//! use dndtree_ui_tree::TreeView;
//! use iced::widget::text;
//! use iced::Element;
//!
//! #[derive(Clone)]
//! enum Message {
//!     RowPressed(NodeId),
//!     Toggled(NodeId),
//! }
//!
//! fn view<'a>(
//!     tree: &'a [TreeNode],
//!     selected: Option<&'a str>,
//! ) -> Element<'a, Message> {
//!     TreeView::new(visible_nodes(tree), |ctx| {
//!         text(ctx.entry.node.label.as_str()).into()
//!     })
//!     .selected(selected)
//!     .indent_width(16.0)
//!     .toggle_width(16.0)
//!     .on_press(Message::RowPressed)
//!     .on_toggle(Message::Toggled)
//!     .view()
//! }
//! ```

mod scroll;
mod view;

pub use scroll::{nearest_offset, row_at, row_top};
pub use view::{TreeRow, TreeRowContext, TreeView};

/// Row height used when none is configured.
pub const DEFAULT_ROW_HEIGHT: f32 = 28.0;
