//! Applied-filter chip row.

use iocraft::prelude::*;

use crate::listview::AppliedFilter;
use crate::tui::theme::theme;

/// Props for the FilterChips component
#[derive(Default, Props)]
pub struct FilterChipsProps {
    pub chips: Vec<AppliedFilter>,
    /// Current free-text query; rendered as a chip alongside the filters.
    pub query: String,
}

/// One chip per applied filter, plus a query chip when a query is set.
/// Renders nothing when no filters or query are active.
#[component]
pub fn FilterChips(props: &FilterChipsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.chips.is_empty() && props.query.is_empty() {
        return element! { View() };
    }

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            column_gap: 1,
        ) {
            #(props.chips.iter().map(|chip| element! {
                Text(
                    content: format!("[{}]", chip.label),
                    color: theme.chip,
                )
            }))
            #((!props.query.is_empty()).then(|| element! {
                Text(
                    content: format!("[query: {}]", props.query),
                    color: theme.chip,
                )
            }))
        }
    }
}
