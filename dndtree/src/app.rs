use dndtree_core::{NodeId, Record, removal_set, remove_subtree};
use dndtree_ui_editor::{
    DndTreeEditor, EditorEffect, EditorEvent, EditorProps,
};
use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length, Task, Theme};

use crate::settings::Settings;

const TITLE_SIZE: f32 = 22.0;
const INFO_SIZE: f32 = 13.0;
const STRUCTURE_HEIGHT: f32 = 180.0;

/// Everything the window needs at boot.
#[derive(Debug, Clone)]
pub(crate) struct Launch {
    pub(crate) items: Vec<Record>,
    pub(crate) settings: Settings,
    pub(crate) node: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Editor(EditorEvent),
}

pub(crate) struct App {
    editor: DndTreeEditor,
    selected: Option<NodeId>,
    theme: Theme,
}

impl App {
    pub(crate) fn new(launch: Launch) -> (Self, Task<AppEvent>) {
        let Launch {
            items,
            settings,
            node,
        } = launch;

        let props = EditorProps {
            scroll_to_selected: settings.editor.scroll_to_selected
                || node.is_some(),
            ..settings.editor
        };
        let mut editor = DndTreeEditor::new(items, props);

        let task = match node {
            Some(id) => Task::batch([
                editor.set_expand_to_id(Some(id.clone())),
                editor.set_selected_id(Some(id)),
            ]),
            None => Task::none(),
        };

        let app = Self {
            selected: editor.selected_id().map(str::to_owned),
            editor,
            theme: settings.theme.theme(),
        };
        (app, task.map(AppEvent::Editor))
    }

    pub(crate) fn title(&self) -> String {
        String::from("dndtree")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        match event {
            AppEvent::Editor(EditorEvent::Intent(intent)) => {
                self.editor.update(intent).map(AppEvent::Editor)
            },
            AppEvent::Editor(EditorEvent::Effect(effect)) => {
                self.apply_effect(effect)
            },
        }
    }

    fn apply_effect(&mut self, effect: EditorEffect) -> Task<AppEvent> {
        match effect {
            EditorEffect::ItemsChanged(items) => {
                log::debug!("tree changed, {} items", items.len());
                Task::none()
            },
            EditorEffect::Selected(id) => {
                self.selected = id;
                Task::none()
            },
            EditorEffect::Removed(id) => {
                let removed = removal_set(self.editor.items(), &id);
                let remaining = remove_subtree(self.editor.items(), &id);
                log::info!("removed {} records under {id}", removed.len());

                let selection_removed = self
                    .selected
                    .as_deref()
                    .or(self.editor.selected_id())
                    .is_some_and(|selected| removed.contains(selected));
                let items_task = self.editor.set_items(remaining);
                if !selection_removed {
                    return items_task.map(AppEvent::Editor);
                }

                self.selected = None;
                let selection_task = self.editor.set_selected_id(None);
                Task::batch([items_task, selection_task]).map(AppEvent::Editor)
            },
            EditorEffect::ScrollTo { .. } => Task::none(),
        }
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        let tree = self.editor.view(&self.theme).map(AppEvent::Editor);
        let editor = container(tree).width(Length::Fill).height(Length::Fill);

        let structure = structure_lines(self.editor.items())
            .into_iter()
            .fold(Column::new().spacing(2), |column, line| {
                column.push(text(line).size(INFO_SIZE))
            });

        column![
            text("Tree Editor with Labels").size(TITLE_SIZE),
            editor,
            text(selection_line(self.selected.as_deref())).size(INFO_SIZE),
            text("Current tree structure:").size(INFO_SIZE),
            scrollable(structure)
                .width(Length::Fill)
                .height(Length::Fixed(STRUCTURE_HEIGHT)),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }
}

fn selection_line(selected: Option<&str>) -> String {
    match selected {
        Some(id) => format!("Selected item ID: {id}"),
        None => String::from("No item selected"),
    }
}

fn structure_lines(items: &[Record]) -> Vec<String> {
    if items.is_empty() {
        return vec![String::from("No items")];
    }

    items
        .iter()
        .map(|item| {
            format!(
                "ID: {}, Label: {}, Parent: {}",
                item.id,
                item.label.as_deref().unwrap_or("No label"),
                item.parent_id.as_deref().unwrap_or("None"),
            )
        })
        .collect()
}
