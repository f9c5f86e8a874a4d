//! Inline search input for free-text queries.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
    /// Handler invoked with the new value on every change
    pub on_change: Option<Handler<String>>,
}

/// Borderless inline search input prefixed with "/"
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let has_focus = props.has_focus;
    let on_change = props.on_change.clone();

    let Some(mut value) = props.value else {
        return element! {
            View(flex_direction: FlexDirection::Row, height: 1) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(
            flex_direction: FlexDirection::Row,
            width: 100pct,
            height: 1,
            padding_left: 1,
        ) {
            View(margin_right: 1) {
                Text(
                    content: "/",
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: has_focus,
                    on_change: move |new_value: String| {
                        value.set(new_value.clone());
                        if let Some(ref handler) = on_change {
                            handler(new_value);
                        }
                    },
                    color: theme.text,
                )
            }
        }
    }
}
