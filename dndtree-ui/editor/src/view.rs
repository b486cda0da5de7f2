use dndtree_core::{descendant_count, drag_items, preview_rows, visible_nodes};
use dndtree_ui_tree::{DEFAULT_ROW_HEIGHT, TreeRowContext, TreeView};
use iced::widget::{Row, Space, button, container, mouse_area, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::event::{EditorEvent, EditorIntent};
use super::props::EditorProps;
use super::state::EditorState;
use super::style::{
    EditorPalette, RowLook, badge_style, indicator_style,
    remove_button_style, thin_scroll_style, tree_row_style,
};

pub(crate) const ROW_HEIGHT: f32 = DEFAULT_ROW_HEIGHT;
pub(crate) const TREE_SCROLL_ID: &str = "dndtree_editor_scroll";

const TOGGLE_WIDTH: f32 = 20.0;
const FONT_SIZE: f32 = 14.0;
const BADGE_FONT_SIZE: f32 = 11.0;
const INDICATOR_HEIGHT: f32 = 2.0;

/// Props for the editor view.
pub(crate) struct EditorViewProps<'a> {
    pub(crate) state: &'a EditorState,
    pub(crate) props: &'a EditorProps,
    pub(crate) theme: &'a Theme,
}

/// Render the tree list with drag preview, toggles and remove buttons.
pub(crate) fn view(
    view_props: EditorViewProps<'_>,
) -> Element<'_, EditorEvent> {
    let EditorViewProps {
        state,
        props,
        theme,
    } = view_props;
    let palette = EditorPalette::from_theme(theme);

    let drag = state.active_drag();
    let active_id = drag.map(|drag| drag.source.as_str());
    let carried = active_id
        .map(|id| descendant_count(state.tree(), id))
        .unwrap_or(0);
    let rows = match drag {
        Some(drag) => {
            let items = drag_items(state.tree(), &drag.source);
            match drag.target.as_ref() {
                Some(target) => preview_rows(
                    items,
                    &drag.source,
                    &target.over,
                    &target.projection,
                ),
                None => items,
            }
        },
        None => visible_nodes(state.tree()),
    };

    let indicator = props.indicator;
    let removable = props.removable;
    let collapsible = props.collapsible;

    let tree = TreeView::new(rows, move |ctx| {
        render_row(ctx, palette, indicator, removable, carried)
    })
    .selected(state.selected_id())
    .hovered(state.hovered_id())
    .active(active_id)
    .row_height(ROW_HEIGHT)
    .indent_width(props.indentation())
    .toggle_width(TOGGLE_WIDTH)
    .toggle_content(move |ctx| toggle_glyph(ctx, collapsible))
    .row_style(move |ctx| tree_row_style(&palette, row_look(ctx, indicator)))
    .on_press(|id| EditorEvent::Intent(EditorIntent::RowPressed { id }));

    let tree = if collapsible {
        tree.on_toggle(|id| {
            EditorEvent::Intent(EditorIntent::ToggleCollapsed { id })
        })
    } else {
        tree
    };

    let list = scrollable(tree.view())
        .id(TREE_SCROLL_ID)
        .on_scroll(|viewport| {
            EditorEvent::Intent(EditorIntent::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette));

    mouse_area(list)
        .on_move(|position| {
            EditorEvent::Intent(EditorIntent::PointerMoved { position })
        })
        .on_release(EditorEvent::Intent(EditorIntent::PointerReleased))
        .on_exit(EditorEvent::Intent(EditorIntent::PointerLeft))
        .into()
}

fn row_look(ctx: &TreeRowContext<'_>, indicator: bool) -> RowLook {
    if ctx.is_active && indicator {
        return RowLook::default();
    }

    RowLook {
        is_selected: ctx.is_selected,
        is_hovered: ctx.is_hovered,
        is_ghost: ctx.is_active,
    }
}

fn render_row<'a>(
    ctx: &TreeRowContext<'a>,
    palette: EditorPalette,
    indicator: bool,
    removable: bool,
    carried: usize,
) -> Element<'a, EditorEvent> {
    if ctx.is_active && indicator {
        let line = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(INDICATOR_HEIGHT))
            .style(move |_| indicator_style(&palette));
        let mut content = Row::new()
            .push(line)
            .spacing(6)
            .align_y(alignment::Vertical::Center);
        if carried > 0 {
            content = content.push(badge(carried, palette));
        }
        return content.width(Length::Fill).into();
    }

    let node = ctx.entry.node;
    let label = container(text(node.label.as_str()).size(FONT_SIZE))
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let mut content = Row::new()
        .push(label)
        .spacing(6)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    if ctx.is_active && carried > 0 {
        content = content.push(badge(carried, palette));
    }

    if removable && !ctx.is_active {
        let remove = button(text("×").size(FONT_SIZE))
            .padding([0, 6])
            .style(remove_button_style(palette))
            .on_press(EditorEvent::Intent(EditorIntent::RemovePressed {
                id: node.id.clone(),
            }));
        content = content.push(remove);
    }

    content.into()
}

/// Count includes the dragged row itself.
fn badge<'a>(
    descendants: usize,
    palette: EditorPalette,
) -> Element<'a, EditorEvent> {
    container(text((descendants + 1).to_string()).size(BADGE_FONT_SIZE))
        .padding([1, 6])
        .style(move |_| badge_style(&palette))
        .into()
}

fn toggle_glyph<'a>(
    ctx: &TreeRowContext<'a>,
    collapsible: bool,
) -> Element<'a, EditorEvent> {
    if !collapsible || !ctx.entry.node.has_children() {
        return Space::new().into();
    }

    let glyph = if ctx.entry.collapsed() { "▸" } else { "▾" };
    text(glyph).size(FONT_SIZE).into()
}
