use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Theme};

/// Colors the editor derives from the active theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EditorPalette {
    pub(crate) text: Color,
    pub(crate) dim_text: Color,
    pub(crate) selected: Color,
    pub(crate) hovered: Color,
    pub(crate) accent: Color,
    pub(crate) on_accent: Color,
    pub(crate) danger: Color,
}

impl EditorPalette {
    pub(crate) fn from_theme(theme: &Theme) -> Self {
        let palette = theme.extended_palette();
        Self {
            text: palette.background.base.text,
            dim_text: palette.background.strong.color,
            selected: palette.primary.weak.color,
            hovered: palette.background.weak.color,
            accent: palette.primary.base.color,
            on_accent: palette.primary.base.text,
            danger: palette.danger.base.color,
        }
    }
}

/// Row flags that decide its look.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RowLook {
    pub(crate) is_selected: bool,
    pub(crate) is_hovered: bool,
    pub(crate) is_ghost: bool,
}

/// Container style for tree rows with selection/hover highlights.
pub(crate) fn tree_row_style(
    palette: &EditorPalette,
    look: RowLook,
) -> container::Style {
    let background = if look.is_selected {
        let mut color = palette.selected;
        color.a = 0.7;
        Some(color.into())
    } else if look.is_hovered {
        let mut color = palette.hovered;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    let mut text_color = palette.text;
    if look.is_ghost {
        text_color.a *= 0.5;
    }

    let background = match (background, look.is_ghost) {
        (Some(Background::Color(mut color)), true) => {
            color.a *= 0.5;
            Some(color.into())
        },
        (background, _) => background,
    };

    container::Style {
        background,
        text_color: Some(text_color),
        border: if look.is_ghost {
            Border {
                color: palette.accent,
                width: 1.0,
                radius: 2.0.into(),
            }
        } else {
            Border::default()
        },
        ..Default::default()
    }
}

/// Drop line shown in place of the dragged row.
pub(crate) fn indicator_style(palette: &EditorPalette) -> container::Style {
    container::Style {
        background: Some(palette.accent.into()),
        border: Border {
            radius: 1.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round badge counting the rows carried by a drag.
pub(crate) fn badge_style(palette: &EditorPalette) -> container::Style {
    container::Style {
        background: Some(palette.accent.into()),
        text_color: Some(palette.on_accent),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless remove button that turns red on hover.
pub(crate) fn remove_button_style(
    palette: EditorPalette,
) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    move |_theme, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.danger
            },
            _ => palette.dim_text,
        };

        button::Style {
            background: None,
            text_color,
            ..Default::default()
        }
    }
}

/// Scrollbar style with thin square rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    palette: EditorPalette,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background
        {
            Background::Color(color) => color,
            _ => palette.dim_text,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> EditorPalette {
        EditorPalette::from_theme(&Theme::Dark)
    }

    #[test]
    fn given_selected_row_when_styled_then_selection_background_is_used() {
        let style = tree_row_style(
            &palette(),
            RowLook {
                is_selected: true,
                is_hovered: true,
                ..RowLook::default()
            },
        );

        let mut expected = palette().selected;
        expected.a = 0.7;
        assert_eq!(style.background, Some(Background::Color(expected)));
    }

    #[test]
    fn given_plain_row_when_styled_then_background_is_transparent() {
        let style = tree_row_style(&palette(), RowLook::default());

        assert_eq!(style.background, None);
        assert_eq!(style.text_color, Some(palette().text));
    }

    #[test]
    fn given_ghost_row_when_styled_then_text_is_translucent() {
        let style = tree_row_style(
            &palette(),
            RowLook {
                is_ghost: true,
                ..RowLook::default()
            },
        );

        let text = style.text_color.expect("text color should be set");
        assert_eq!(text.a, palette().text.a * 0.5);
        assert_eq!(style.border.width, 1.0);
    }
}
