use serde::{Deserialize, Serialize};

const DEFAULT_INDENTATION_WIDTH: f32 = 50.0;

/// Behaviour flags of the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorProps {
    /// Rows with children get a collapse toggle.
    pub collapsible: bool,
    /// Rows get a remove button.
    pub removable: bool,
    /// Render the dragged row as a drop line instead of a ghost.
    pub indicator: bool,
    /// Horizontal offset per depth level, in logical pixels.
    pub indentation_width: f32,
    /// Keep the selected (or expanded-to) row scrolled into view.
    pub scroll_to_selected: bool,
    /// Report removals to the host instead of removing the subtree.
    pub delegate_removal: bool,
}

impl Default for EditorProps {
    fn default() -> Self {
        Self {
            collapsible: true,
            removable: false,
            indicator: false,
            indentation_width: DEFAULT_INDENTATION_WIDTH,
            scroll_to_selected: false,
            delegate_removal: false,
        }
    }
}

impl EditorProps {
    /// Indentation width, falling back to the default when unusable.
    pub fn indentation(&self) -> f32 {
        if self.indentation_width.is_finite() && self.indentation_width > 0.0 {
            self.indentation_width
        } else {
            DEFAULT_INDENTATION_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_json_when_parsed_then_defaults_apply() {
        let props: EditorProps =
            serde_json::from_str("{}").expect("props should parse");

        assert_eq!(props, EditorProps::default());
        assert!(props.collapsible);
        assert!(!props.removable);
        assert_eq!(props.indentation_width, 50.0);
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_use_defaults() {
        let props: EditorProps = serde_json::from_str(
            r#"{ "indicator": true, "indentation_width": 30 }"#,
        )
        .expect("props should parse");

        assert!(props.indicator);
        assert_eq!(props.indentation_width, 30.0);
        assert!(props.collapsible);
    }

    #[test]
    fn given_unusable_width_when_resolving_indentation_then_default_is_used() {
        let props = EditorProps {
            indentation_width: -4.0,
            ..EditorProps::default()
        };

        assert_eq!(props.indentation(), 50.0);
    }
}
