//! Empty state component for loading, empty, and error conditions.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Initial read is in flight
    Loading,
    /// The shop returned no rows at all
    #[default]
    NoRows,
    /// Rows exist but none match the active filters or query
    NoMatches,
    /// The read failed
    LoadFailed,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Error detail for LoadFailed, or the query for NoMatches
    pub detail: Option<String>,
}

/// Centered message for an empty list area
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Fetching data from your shop..."),
        EmptyStateKind::NoRows => ("i", "Nothing Here", "Your shop has no records of this kind yet."),
        EmptyStateKind::NoMatches => (
            "?",
            "No Results",
            "No rows match the active filters. Press 'f' to adjust filters or Esc to clear the search.",
        ),
        EmptyStateKind::LoadFailed => ("!", "Load Failed", "Could not reach your shop."),
    };
    let is_error = props.kind == EmptyStateKind::LoadFailed;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.error } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_error { theme.error } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(content: message, color: theme.text_dimmed)
            }

            #(props.detail.clone().map(|detail| element! {
                View(margin_top: 1, max_width: 60) {
                    Text(
                        content: detail,
                        color: if is_error { theme.error } else { theme.accent },
                    )
                }
            }))
        }
    }
}
