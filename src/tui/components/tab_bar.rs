//! Saved-view tab strip.

use iocraft::prelude::*;

use crate::listview::SavedView;
use crate::tui::theme::theme;

/// Props for the TabBar component
#[derive(Default, Props)]
pub struct TabBarProps {
    pub views: Vec<SavedView>,
    pub active_index: usize,
    /// A view save is in flight; shows a spinner hint next to the tabs.
    pub saving: bool,
}

/// Horizontal strip of saved-view tabs, active tab highlighted
#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active_index;

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            column_gap: 1,
        ) {
            #(props.views.iter().enumerate().map(|(i, view)| {
                let is_active = i == active;
                element! {
                    View(background_color: if is_active { Some(theme.accent) } else { None }) {
                        Text(
                            content: format!(" {} ", view.name),
                            color: if is_active { theme.background } else { theme.text_dimmed },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
            #(props.saving.then(|| element! {
                Text(content: "saving…", color: theme.text_dimmed)
            }))
        }
    }
}
