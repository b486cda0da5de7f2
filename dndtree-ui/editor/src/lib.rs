//! Drag-and-drop tree editor widget for [`iced`].
//!
//! [`DndTreeEditor`] displays a flat list of parent-referencing
//! [`Record`]s as a collapsible tree. Rows can be dragged to reorder or
//! reparent them; horizontal pointer travel while dragging changes the depth
//! in steps of [`EditorProps::indentation_width`].
//!
//! The editor follows the usual iced update loop:
//! 1. render it with [`DndTreeEditor::view`];
//! 2. route [`EditorEvent::Intent`] back into [`DndTreeEditor::update`];
//! 3. react to [`EditorEvent::Effect`] in the host, e.g. store the new
//!    records on [`EditorEffect::ItemsChanged`].
//!
//! # Quick Example
//!
//! ```no_run
//! use dndtree_core::Record;
//! use dndtree_ui_editor::{
//!     DndTreeEditor, EditorEffect, EditorEvent, EditorProps,
//! };
//! use iced::{Element, Task, Theme};
//!
//! struct App {
//!     editor: DndTreeEditor,
//!     theme: Theme,
//! }
//!
//! fn update(app: &mut App, event: EditorEvent) -> Task<EditorEvent> {
//!     match event {
//!         EditorEvent::Intent(intent) => app.editor.update(intent),
//!         EditorEvent::Effect(EditorEffect::Selected(id)) => {
//!             println!("selected: {id:?}");
//!             Task::none()
//!         },
//!         EditorEvent::Effect(_) => Task::none(),
//!     }
//! }
//!
//! fn view(app: &App) -> Element<'_, EditorEvent> {
//!     app.editor.view(&app.theme)
//! }
//!
//! let items = vec![Record::new("1", None), Record::new("2", Some("1"))];
//! let _app = App {
//!     editor: DndTreeEditor::new(items, EditorProps::default()),
//!     theme: Theme::Dark,
//! };
//! ```

mod event;
mod props;
mod reducer;
mod state;
mod style;
mod view;

use dndtree_core::{ExpandedSet, NodeId, Record};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Element, Task, Theme};

pub use event::{EditorEffect, EditorEvent, EditorIntent};
pub use props::EditorProps;
use state::EditorState;

/// Drag-and-drop tree editor over flat records.
pub struct DndTreeEditor {
    state: EditorState,
    props: EditorProps,
}

impl DndTreeEditor {
    /// Create an editor with every node collapsed.
    pub fn new(items: Vec<Record>, props: EditorProps) -> Self {
        Self {
            state: EditorState::new(items),
            props,
        }
    }

    /// Reduce an intent into state updates and host effects.
    pub fn update(&mut self, intent: EditorIntent) -> Task<EditorEvent> {
        let effects = reducer::reduce(&mut self.state, &self.props, intent);
        effects_task(effects)
    }

    /// Replace the records, keeping expansion and selection.
    pub fn set_items(&mut self, items: Vec<Record>) -> Task<EditorEvent> {
        let effects = reducer::set_items(&mut self.state, &self.props, items);
        effects_task(effects)
    }

    /// Select a node, or clear the selection with `None`.
    pub fn set_selected_id(
        &mut self,
        id: Option<NodeId>,
    ) -> Task<EditorEvent> {
        let effects =
            reducer::set_selected_id(&mut self.state, &self.props, id);
        effects_task(effects)
    }

    /// Expand the ancestors of a node so it becomes visible.
    pub fn set_expand_to_id(
        &mut self,
        id: Option<NodeId>,
    ) -> Task<EditorEvent> {
        let effects =
            reducer::set_expand_to_id(&mut self.state, &self.props, id);
        effects_task(effects)
    }

    /// Replace the behaviour flags.
    pub fn set_props(&mut self, props: EditorProps) -> Task<EditorEvent> {
        self.props = props;
        let effects = reducer::scroll_request(&self.state, &self.props);
        effects_task(effects.into_iter().collect())
    }

    /// Render the editor using colors from `theme`.
    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, EditorEvent> {
        view::view(view::EditorViewProps {
            state: &self.state,
            props: &self.props,
            theme,
        })
    }

    // --- Read access ---

    pub fn items(&self) -> &[Record] {
        self.state.items()
    }

    pub fn expanded(&self) -> &ExpandedSet {
        self.state.expanded()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_id()
    }

    pub fn props(&self) -> &EditorProps {
        &self.props
    }
}

/// Turn reducer effects into tasks: scrolls run as widget operations,
/// everything else goes to the host.
fn effects_task(effects: Vec<EditorEffect>) -> Task<EditorEvent> {
    Task::batch(effects.into_iter().map(|effect| match effect {
        EditorEffect::ScrollTo { offset_y } => operation::scroll_to(
            view::TREE_SCROLL_ID,
            AbsoluteOffset {
                x: 0.0,
                y: offset_y,
            },
        ),
        effect => Task::done(EditorEvent::Effect(effect)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(props: EditorProps) -> DndTreeEditor {
        DndTreeEditor::new(
            vec![
                Record::new("a", None),
                Record::new("b", Some("a")),
                Record::new("c", Some("b")),
            ],
            props,
        )
    }

    #[test]
    fn given_expand_target_when_set_then_path_to_node_opens() {
        let mut editor = editor(EditorProps::default());

        let _task = editor.set_expand_to_id(Some(String::from("c")));

        let expected: ExpandedSet =
            [String::from("a"), String::from("b")].into();
        assert_eq!(editor.expanded(), &expected);
    }

    #[test]
    fn given_unknown_expand_target_when_set_then_nothing_opens() {
        let mut editor = editor(EditorProps::default());

        let _task = editor.set_expand_to_id(Some(String::from("zzz")));

        assert!(editor.expanded().is_empty());
    }

    #[test]
    fn given_host_selection_when_set_then_selection_is_stored() {
        let mut editor = editor(EditorProps::default());

        let _task = editor.set_selected_id(Some(String::from("b")));
        assert_eq!(editor.selected_id(), Some("b"));

        let _task = editor.set_selected_id(None);
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn given_new_props_when_set_then_flags_are_replaced() {
        let mut editor = editor(EditorProps::default());

        let _task = editor.set_props(EditorProps {
            removable: true,
            ..EditorProps::default()
        });

        assert!(editor.props().removable);
        assert_eq!(editor.items().len(), 3);
    }
}
