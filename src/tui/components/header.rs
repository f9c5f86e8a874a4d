//! Screen header bar component.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Screen title, e.g. "Orders".
    pub title: String,
    /// Shop domain shown on the right.
    pub shop: Option<String>,
    /// Row count label, e.g. "12 orders".
    pub count_label: Option<String>,
}

/// Header bar showing the screen title, shop, and row count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: format!("Storekeep / {}", props.title),
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.count_label.clone().map(|label| element! {
                    Text(content: label, color: theme.text_dimmed)
                }))
                #(props.shop.clone().map(|shop| element! {
                    Text(content: shop, color: theme.text_dimmed)
                }))
            }
        }
    }
}
