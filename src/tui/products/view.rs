//! Products screen component.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::gateway::{AdminGateway, Gateway, Product, ProductChanges};
use crate::tui::components::footer::shortcuts;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, Header, ModalContainer, ModalOverlay, render_toast,
};
use crate::tui::navigation;
use crate::tui::theme::theme;
use crate::utils::text::{strip_tags, truncate};

use super::model::{EditField, ProductsState};

async fn load_products() -> Result<Vec<Product>> {
    let config = Config::load()?;
    let gateway = AdminGateway::from_config(&config)?;
    gateway.fetch_products().await
}

async fn push_update(id: String, changes: ProductChanges) -> Result<Product> {
    let config = Config::load()?;
    let gateway = AdminGateway::from_config(&config)?;
    gateway.update_product(id, changes).await
}

/// Product list with an inline title/description editor.
#[component]
pub fn ProductsScreen(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let state: State<ProductsState> = hooks.use_state(ProductsState::new);
    let shop = hooks.use_state(|| {
        Config::load()
            .ok()
            .and_then(|config| config.shop)
            .unwrap_or_default()
    });

    // Each product renders as a two-line card
    let list_height = ((height as usize).saturating_sub(7) / 2).max(2);

    let fetch_handler: Handler<()> = hooks.use_async_handler({
        let state = state.clone();
        move |()| {
            let mut state = state.clone();
            async move {
                match load_products().await {
                    Ok(products) => {
                        let mut s = state.read().clone();
                        s.rows_loaded(products);
                        state.set(s);
                    }
                    Err(e) => {
                        let mut s = state.read().clone();
                        s.load_failed(e.to_string());
                        state.set(s);
                    }
                }
            }
        }
    });

    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        fetch_handler.clone()(());
    }

    // Submits the edit form. Success closes it; rejection leaves it open
    // with the error inline.
    let update_handler: Handler<(String, ProductChanges)> = hooks.use_async_handler({
        let state = state.clone();
        move |(id, changes): (String, ProductChanges)| {
            let mut state = state.clone();
            async move {
                match push_update(id, changes).await {
                    Ok(updated) => {
                        let mut s = state.read().clone();
                        s.update_succeeded(updated);
                        state.set(s);
                    }
                    Err(e) => {
                        let mut s = state.read().clone();
                        s.update_failed(e.to_string());
                        state.set(s);
                    }
                }
            }
        }
    });

    let update_for_events = update_handler.clone();
    let fetch_for_events = fetch_handler.clone();

    hooks.use_terminal_events({
        let mut state = state.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let editing = state.read().edit.is_some();
                if editing {
                    match code {
                        KeyCode::Esc => {
                            let mut s = state.read().clone();
                            s.edit = None;
                            state.set(s);
                        }
                        KeyCode::Tab | KeyCode::BackTab => {
                            let mut s = state.read().clone();
                            if let Some(form) = s.edit.as_mut() {
                                form.focused = form.focused.toggle();
                            }
                            state.set(s);
                        }
                        KeyCode::Enter => {
                            let mut s = state.read().clone();
                            let Some(form) = s.edit.as_mut() else {
                                return;
                            };
                            if form.submitting {
                                return;
                            }
                            if form.title.trim().is_empty() {
                                form.error = Some("Title is required".to_string());
                                state.set(s);
                                return;
                            }
                            form.submitting = true;
                            form.error = None;
                            let id = form.product_id.clone();
                            let changes = form.changes();
                            state.set(s);
                            update_for_events((id, changes));
                        }
                        _ => {}
                    }
                    return;
                }

                match code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        let mut s = state.read().clone();
                        let count = s.products.len();
                        navigation::scroll_down(
                            &mut s.selected_index,
                            &mut s.scroll_offset,
                            count,
                            list_height,
                        );
                        state.set(s);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        let mut s = state.read().clone();
                        navigation::scroll_up(&mut s.selected_index, &mut s.scroll_offset);
                        state.set(s);
                    }
                    KeyCode::Char('g') => {
                        let mut s = state.read().clone();
                        navigation::scroll_to_top(&mut s.selected_index, &mut s.scroll_offset);
                        state.set(s);
                    }
                    KeyCode::Char('G') => {
                        let mut s = state.read().clone();
                        let count = s.products.len();
                        navigation::scroll_to_bottom(
                            &mut s.selected_index,
                            &mut s.scroll_offset,
                            count,
                            list_height,
                        );
                        state.set(s);
                    }
                    KeyCode::Char('e') | KeyCode::Enter => {
                        let mut s = state.read().clone();
                        s.open_editor();
                        state.set(s);
                    }
                    KeyCode::Char('R') => {
                        let mut s = state.read().clone();
                        s.is_loading = true;
                        state.set(s);
                        fetch_for_events(());
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
    let edit_state = s.edit.clone();

    let empty = if s.is_loading {
        Some((EmptyStateKind::Loading, None))
    } else if s.products.is_empty() {
        match &s.load_error {
            Some(message) => Some((EmptyStateKind::LoadFailed, Some(message.clone()))),
            None => Some((EmptyStateKind::NoRows, None)),
        }
    } else {
        None
    };

    let start = s.scroll_offset;
    let end = (start + list_height).min(s.products.len());
    let cards: Vec<(usize, Product)> = s.products[start..end.max(start)]
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, p)| (start + i, p))
        .collect();
    let selected_index = s.selected_index;

    let footer_shortcuts = if edit_state.is_some() {
        shortcuts([
            ("Tab", "Switch Field"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ])
    } else {
        shortcuts([
            ("j/k", "Up/Down"),
            ("e/Enter", "Edit"),
            ("R", "Refresh"),
            ("q", "Quit"),
        ])
    };

    let count_label = format!("{} products", s.products.len());
    let form_input = state.clone();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: "Products".to_string(),
                shop: Some(shop.to_string()),
                count_label: Some(count_label),
            )

            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column) {
                #(Some(match &empty {
                    Some((kind, detail)) => element! {
                        EmptyState(kind: *kind, detail: detail.clone())
                    }.into_any(),
                    None => element! {
                        View(
                            width: 100pct,
                            flex_direction: FlexDirection::Column,
                            border_style: BorderStyle::Round,
                            border_color: theme.border,
                        ) {
                            #(cards.iter().map(|(index, product)| {
                                let is_cursor = *index == selected_index;
                                let summary = truncate(&strip_tags(&product.description_html), 70);
                                element! {
                                    View(
                                        flex_direction: FlexDirection::Column,
                                        padding_left: 1,
                                        background_color: if is_cursor {
                                            Some(theme.highlight)
                                        } else {
                                            None
                                        },
                                    ) {
                                        Text(
                                            content: product.title.clone(),
                                            color: if is_cursor { theme.background } else { theme.text },
                                            weight: Weight::Bold,
                                        )
                                        Text(
                                            content: summary,
                                            color: if is_cursor { theme.background } else { theme.text_dimmed },
                                        )
                                    }
                                }
                            }))
                        }
                    }.into_any(),
                }))
            }

            Footer(shortcuts: footer_shortcuts)

            #(render_toast(&toast_state))

            #(edit_state.map(|form| {
                let target = form_input.clone();
                let focused = form.focused;
                element! {
                    ModalOverlay(show_backdrop: true) {
                        ModalContainer(
                            title: "Edit product".to_string(),
                            footer_text: "Tab to switch field, Enter to save, Esc to cancel".to_string(),
                        ) {
                            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                                Text(content: "Title", color: theme.text_dimmed)
                                View(
                                    border_style: BorderStyle::Round,
                                    border_color: if focused == EditField::Title {
                                        theme.border_focused
                                    } else {
                                        theme.border
                                    },
                                    padding_left: 1,
                                ) {
                                    TextInput(
                                        value: form.title.clone(),
                                        has_focus: focused == EditField::Title && !form.submitting,
                                        on_change: {
                                            let mut target = target.clone();
                                            move |text: String| {
                                                let mut next = target.read().clone();
                                                if let Some(editing) = next.edit.as_mut() {
                                                    editing.title = text;
                                                }
                                                target.set(next);
                                            }
                                        },
                                    )
                                }
                            }

                            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                                Text(content: "Description", color: theme.text_dimmed)
                                View(
                                    border_style: BorderStyle::Round,
                                    border_color: if focused == EditField::Description {
                                        theme.border_focused
                                    } else {
                                        theme.border
                                    },
                                    padding_left: 1,
                                    min_height: 3,
                                ) {
                                    TextInput(
                                        value: form.description.clone(),
                                        has_focus: focused == EditField::Description && !form.submitting,
                                        multiline: true,
                                        on_change: {
                                            let mut target = target.clone();
                                            move |text: String| {
                                                let mut next = target.read().clone();
                                                if let Some(editing) = next.edit.as_mut() {
                                                    editing.description = text;
                                                }
                                                target.set(next);
                                            }
                                        },
                                    )
                                }
                            }

                            #(form.submitting.then(|| element! {
                                Text(content: "Saving...", color: theme.text_dimmed)
                            }))

                            #(form.error.clone().map(|message| element! {
                                Text(content: message, color: theme.error)
                            }))
                        }
                    }
                }
            }))
        }
    }
}
