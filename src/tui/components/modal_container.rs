//! Modal building blocks: the centering overlay and the standardized
//! modal box with header, content area, and footer.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Standard backdrop color for all modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Whether to paint a solid backdrop behind the modal
    pub show_backdrop: Option<bool>,
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen absolute overlay that centers its children. Screens wrap a
/// `ModalContainer` in one of these whenever an overlay owns the keyboard.
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(false);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    /// Fixed column count
    Fixed(u32),
    /// Percentage of terminal width
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

/// Modal height configuration
#[derive(Clone, Default)]
pub enum ModalHeight {
    /// Content-determined
    #[default]
    Auto,
    Fixed(u32),
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub height: Option<ModalHeight>,
    pub border_color: Option<Color>,
    pub title: Option<String>,
    /// Hint text in the footer, e.g. "Enter to confirm, Esc to cancel"
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Modal box with an optional titled header and hint footer.
#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let border_color = props.border_color.unwrap_or(theme.border_focused);
    let width = props.width.clone().unwrap_or_default();
    let height = props.height.clone().unwrap_or_default();

    element! {
        View(
            width: match &width {
                ModalWidth::Fixed(n) => Size::Length(*n),
                ModalWidth::Percent(n) => Size::Percent(*n as f32),
            },
            height: match &height {
                ModalHeight::Auto => Size::Auto,
                ModalHeight::Fixed(n) => Size::Length(*n),
            },
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(props.title.clone().map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(
                        content: title,
                        color: theme.accent,
                        weight: Weight::Bold,
                    )
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(props.footer_text.clone().map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_width_default() {
        assert!(matches!(ModalWidth::default(), ModalWidth::Fixed(60)));
    }

    #[test]
    fn test_modal_height_default() {
        assert!(matches!(ModalHeight::default(), ModalHeight::Auto));
    }
}
