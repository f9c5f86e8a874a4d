//! Analytics screen component.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::gateway::{AdminGateway, Gateway, Order};
use crate::tui::components::footer::shortcuts;
use crate::tui::components::{
    BarChart, ChartBar, EmptyState, EmptyStateKind, Footer, Header, render_toast,
};
use crate::tui::theme::theme;

use super::model::{AnalyticsState, build_series};

async fn load_range(query: String) -> Result<Vec<Order>> {
    let config = Config::load()?;
    let gateway = AdminGateway::from_config(&config)?;
    gateway.fetch_orders(Some(query)).await
}

/// Revenue chart over a selectable date range.
#[component]
pub fn AnalyticsScreen(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let state: State<AnalyticsState> = hooks.use_state(AnalyticsState::now);
    let shop = hooks.use_state(|| {
        Config::load()
            .ok()
            .and_then(|config| config.shop)
            .unwrap_or_default()
    });

    // One read per range change; the points of the previous range are
    // replaced wholesale when the new read lands. Each read carries the
    // fetch tag it was issued under, and the model drops superseded ones.
    let fetch_handler: Handler<(u32, String)> = hooks.use_async_handler({
        let state = state.clone();
        move |(tag, query): (u32, String)| {
            let mut state = state.clone();
            async move {
                match load_range(query).await {
                    Ok(orders) => {
                        let mut s = state.read().clone();
                        s.series_loaded(tag, build_series(&orders));
                        state.set(s);
                    }
                    Err(e) => {
                        let mut s = state.read().clone();
                        s.load_failed(tag, e.to_string());
                        state.set(s);
                    }
                }
            }
        }
    });

    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        let tag = state.read().fetches;
        let query = state.read().range().query();
        fetch_handler.clone()((tag, query));
    }

    let fetch_for_events = fetch_handler.clone();

    hooks.use_terminal_events({
        let mut state = state.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = (c as usize) - ('1' as usize);
                        let mut s = state.read().clone();
                        if s.set_range(index) {
                            let request = (s.fetches, s.range().query());
                            state.set(s);
                            fetch_for_events(request);
                        }
                    }
                    KeyCode::Char('h') | KeyCode::Left => {
                        let mut s = state.read().clone();
                        let index = s.range_index.saturating_sub(1);
                        if s.set_range(index) {
                            let request = (s.fetches, s.range().query());
                            state.set(s);
                            fetch_for_events(request);
                        }
                    }
                    KeyCode::Char('l') | KeyCode::Right => {
                        let mut s = state.read().clone();
                        let index = s.range_index + 1;
                        if s.set_range(index) {
                            let request = (s.fetches, s.range().query());
                            state.set(s);
                            fetch_for_events(request);
                        }
                    }
                    KeyCode::Esc => {
                        let mut s = state.read().clone();
                        s.toast = None;
                        state.set(s);
                    }
                    KeyCode::Char('q') => {
                        let mut s = state.read().clone();
                        s.should_exit = true;
                        state.set(s);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let s = state.read().clone();
    let toast_state = s.toast.clone();
    let presets = s.presets.clone();
    let range_index = s.range_index;

    let bars: Vec<ChartBar> = s
        .points
        .iter()
        .map(|point| ChartBar {
            label: point.label.clone(),
            value: format!("${}", point.value),
            magnitude: point.magnitude,
        })
        .collect();

    let empty = if s.is_loading {
        Some((EmptyStateKind::Loading, None))
    } else if s.points.is_empty() {
        match &s.load_error {
            Some(message) => Some((EmptyStateKind::LoadFailed, Some(message.clone()))),
            None => Some((EmptyStateKind::NoRows, None)),
        }
    } else {
        None
    };

    let summary = format!(
        "{} orders, ${:.2} total",
        s.points.len(),
        s.total_revenue(),
    );

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: "Analytics".to_string(),
                shop: Some(shop.to_string()),
                count_label: Some(summary),
            )

            // Range preset strip
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                column_gap: 1,
            ) {
                #(presets.iter().enumerate().map(|(i, preset)| {
                    let is_active = i == range_index;
                    element! {
                        View(background_color: if is_active { Some(theme.accent) } else { None }) {
                            Text(
                                content: format!(" {}:{} ", i + 1, preset.label),
                                color: if is_active { theme.background } else { theme.text_dimmed },
                                weight: if is_active { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }
                }))
            }

            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column, padding_top: 1) {
                #(Some(match &empty {
                    Some((kind, detail)) => element! {
                        EmptyState(kind: *kind, detail: detail.clone())
                    }.into_any(),
                    None => element! {
                        BarChart(bars: bars.clone(), label_width: 28usize, bar_width: 30usize)
                    }.into_any(),
                }))
            }

            Footer(shortcuts: shortcuts([
                ("1-4", "Range"),
                ("h/l", "Prev/Next Range"),
                ("q", "Quit"),
            ]))

            #(render_toast(&toast_state))
        }
    }
}
