use dndtree_core::{FlattenedNode, NodeId};
use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

/// Flattened tree row used by [`TreeView`] render callbacks.
pub type TreeRow<'a> = FlattenedNode<'a>;

/// Rendering context passed to row callbacks.
pub struct TreeRowContext<'a> {
    pub entry: TreeRow<'a>,
    pub is_selected: bool,
    pub is_hovered: bool,
    /// Row is the one being dragged.
    pub is_active: bool,
}

type RowRenderer<'a, Message> =
    dyn Fn(&TreeRowContext<'a>) -> Element<'a, Message> + 'a;
type RowStyle<'a> = dyn Fn(&TreeRowContext<'a>) -> container::Style + 'a;
type ToggleContent<'a, Message> =
    dyn Fn(&TreeRowContext<'a>) -> Element<'a, Message> + 'a;
type RowAction<'a, Message> = dyn Fn(NodeId) -> Message + 'a;

/// Tree view over pre-flattened rows, keyed by node id.
///
/// Rows are rendered in the given order at a fixed height, so a pointer
/// position maps back onto a row slot with [`crate::row_at`].
pub struct TreeView<'a, Message: Clone + 'a> {
    rows: Vec<TreeRow<'a>>,
    selected: Option<&'a str>,
    hovered: Option<&'a str>,
    active: Option<&'a str>,
    on_press: Option<Box<RowAction<'a, Message>>>,
    on_toggle: Option<Box<RowAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, Message>>,
    row_style: Option<Box<RowStyle<'a>>>,
    toggle_content: Option<Box<ToggleContent<'a, Message>>>,
    row_height: f32,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, Message> TreeView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a tree view that renders each row using `render_row`.
    pub fn new(
        rows: Vec<TreeRow<'a>>,
        render_row: impl Fn(&TreeRowContext<'a>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            rows,
            selected: None,
            hovered: None,
            active: None,
            on_press: None,
            on_toggle: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            row_height: crate::DEFAULT_ROW_HEIGHT,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the currently selected node id.
    pub fn selected(mut self, id: Option<&'a str>) -> Self {
        self.selected = id;
        self
    }

    /// Provide the currently hovered node id.
    pub fn hovered(mut self, id: Option<&'a str>) -> Self {
        self.hovered = id;
        self
    }

    /// Provide the id of the row being dragged.
    pub fn active(mut self, id: Option<&'a str>) -> Self {
        self.active = id;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(NodeId) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when the toggle of a row with children is clicked.
    pub fn on_toggle(
        mut self,
        on_toggle: impl Fn(NodeId) -> Message + 'a,
    ) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TreeRowContext<'a>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle area.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&TreeRowContext<'a>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Fixed height of every row.
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(1.0);
        self
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle area.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Build the `Element` for the tree view.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for entry in self.rows.iter().copied() {
            let id = entry.id();
            let context = TreeRowContext {
                entry,
                is_selected: self.selected == Some(id),
                is_hovered: self.hovered == Some(id),
                is_active: self.active == Some(id),
            };

            let content = (self.render_row)(&context);
            let content = match self.on_press.as_deref() {
                Some(on_press) => mouse_area(content)
                    .on_press(on_press(id.to_owned()))
                    .interaction(mouse::Interaction::Pointer)
                    .into(),
                None => content,
            };

            let mut row = Row::new()
                .spacing(0.0)
                .height(Length::Fixed(self.row_height))
                .align_y(alignment::Vertical::Center);

            let indent = context.entry.depth as f32 * self.indent_width;
            if indent > 0.0 {
                row = row.push(Space::new().width(Length::Fixed(indent)));
            }

            if self.toggle_width > 0.0 || self.toggle_content.is_some() {
                row = row.push(build_toggle_slot(&context, &self));
            }

            row = row.push(content);

            let mut row_element: Element<'a, Message> = row.into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element = container(row_element)
                    .width(Length::Fill)
                    .style(move |_| style)
                    .into();
            }

            column = column.push(row_element);
        }

        column.width(Length::Fill).into()
    }
}

fn build_toggle_slot<'a, Message>(
    context: &TreeRowContext<'a>,
    view: &TreeView<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let content = view
        .toggle_content
        .as_ref()
        .map(|toggle| toggle(context))
        .unwrap_or_else(|| Space::new().into());

    let content: Element<'a, Message> = container(content)
        .width(Length::Fixed(view.toggle_width))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into();

    if context.entry.node.has_children() {
        if let Some(on_toggle) = view.on_toggle.as_ref() {
            return mouse_area(content)
                .on_press(on_toggle(context.entry.id().to_owned()))
                .interaction(mouse::Interaction::Pointer)
                .into();
        }
    }

    content
}
