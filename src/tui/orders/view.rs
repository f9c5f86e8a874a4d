//! Orders screen component.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::gateway::{AdminGateway, Gateway, Order, OrderInput};
use crate::listview::simulate_view_save;
use crate::tui::components::footer::shortcuts;
use crate::tui::components::{
    DataTable, EmptyState, EmptyStateKind, FilterChips, Footer, Header, ModalContainer,
    ModalOverlay, SearchBox, TabBar, TableRow, Toast, render_toast,
};
use crate::tui::list_screen::{
    ListAction, ListScreenState, PromptKind, key_to_action, reduce,
};
use crate::tui::theme::theme;

use super::model::{self, CreateOrderForm, OrderField};

async fn load_orders() -> Result<Vec<Order>> {
    let config = Config::load()?;
    let gateway = AdminGateway::from_config(&config)?;
    gateway.fetch_orders(None).await
}

async fn submit_order(input: OrderInput) -> Result<String> {
    let config = Config::load()?;
    let gateway = AdminGateway::from_config(&config)?;
    gateway.create_order(input).await
}

/// Orders list with saved views, filters, search, sort, bulk selection,
/// and an order creation form.
#[component]
pub fn OrdersScreen(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let state: State<ListScreenState<Order>> = hooks.use_state(model::default_state);
    let form: State<Option<CreateOrderForm>> = hooks.use_state(|| None);
    let search_value: State<String> = hooks.use_state(String::new);
    let shop = hooks.use_state(|| {
        Config::load()
            .ok()
            .and_then(|config| config.shop)
            .unwrap_or_default()
    });

    let list_height = (height as usize).saturating_sub(10).max(3);

    // Async fetch handler for loading the orders page
    let fetch_handler: Handler<()> = hooks.use_async_handler({
        let state = state.clone();
        move |()| {
            let mut state = state.clone();
            async move {
                match load_orders().await {
                    Ok(orders) => {
                        let mut s = state.read().clone();
                        s.rows_loaded(orders);
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

    // Trigger initial fetch on startup
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        fetch_handler.clone()(());
    }

    // Commits a pending view create/duplicate after the save delay
    let save_view_handler: Handler<(PromptKind, String)> = hooks.use_async_handler({
        let state = state.clone();
        move |(kind, name): (PromptKind, String)| {
            let mut state = state.clone();
            async move {
                simulate_view_save().await;
                let mut s = state.read().clone();
                reduce(&mut s, ListAction::CommitViewSave { kind, name }, 0);
                state.set(s);
            }
        }
    });

    // Submits the order form. The form only closes on confirmed success;
    // a rejected mutation leaves it open with the error inline.
    let create_handler: Handler<OrderInput> = hooks.use_async_handler({
        let state = state.clone();
        let form = form.clone();
        let fetch_handler = fetch_handler.clone();
        move |input: OrderInput| {
            let mut state = state.clone();
            let mut form = form.clone();
            let fetch_handler = fetch_handler.clone();
            async move {
                match submit_order(input).await {
                    Ok(id) => {
                        form.set(None);
                        let mut s = state.read().clone();
                        s.toast = Some(Toast::success(format!("Order {} created", id)));
                        state.set(s);
                        fetch_handler(());
                    }
                    Err(e) => {
                        let mut f = form.read().clone();
                        if let Some(open) = f.as_mut() {
                            open.error = Some(e.to_string());
                            open.submitting = false;
                        }
                        form.set(f);
                    }
                }
            }
        }
    });

    let save_view_for_events = save_view_handler.clone();
    let create_for_events = create_handler.clone();
    let fetch_for_events = fetch_handler.clone();

    hooks.use_terminal_events({
        let mut state = state.clone();
        let mut form = form.clone();
        let mut search_value = search_value.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                // The order form owns the keyboard while open
                if form.read().is_some() {
                    match code {
                        KeyCode::Esc => form.set(None),
                        KeyCode::Tab | KeyCode::BackTab => {
                            let mut f = form.read().clone();
                            if let Some(open) = f.as_mut() {
                                open.focused = if code == KeyCode::Tab {
                                    open.focused.next()
                                } else {
                                    open.focused.prev()
                                };
                            }
                            form.set(f);
                        }
                        KeyCode::Enter => {
                            let Some(current) = form.read().clone() else {
                                return;
                            };
                            if current.submitting {
                                return;
                            }
                            match current.validate() {
                                Ok(input) => {
                                    let mut next = current;
                                    next.submitting = true;
                                    next.error = None;
                                    form.set(Some(next));
                                    create_for_events(input);
                                }
                                Err(message) => {
                                    let mut next = current;
                                    next.error = Some(message);
                                    form.set(Some(next));
                                }
                            }
                        }
                        _ => {}
                    }
                    return;
                }

                let mode = state.read().mode();
                let overlay_open = mode.prompt_open
                    || mode.filter_panel_open
                    || mode.sort_menu_open
                    || mode.search_focused;
                if !overlay_open {
                    match code {
                        KeyCode::Char('o') => {
                            form.set(Some(CreateOrderForm::default()));
                            return;
                        }
                        KeyCode::Char('R') => {
                            let mut s = state.read().clone();
                            s.is_loading = true;
                            state.set(s);
                            fetch_for_events(());
                            return;
                        }
                        _ => {}
                    }
                }

                if let Some(action) = key_to_action(code, modifiers, &mode) {
                    if action == ListAction::ClearSearch {
                        search_value.set(String::new());
                    }
                    let mut s = state.read().clone();
                    reduce(&mut s, action, list_height);
                    if let Some(pending) = s.pending_view.take() {
                        save_view_for_events(pending);
                    }
                    state.set(s);
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    // Snapshot everything the render needs
    let s = state.read().clone();
    let visible = s.visible();
    let rows: Vec<TableRow> = visible
        .iter()
        .map(|order| model::row_cells(order, s.controller.is_selected(&order.id)))
        .collect();
    let chips = s.controller.applied_filters();
    let query = s.controller.query().to_string();
    let views = s.controller.views().to_vec();
    let active_view = s.controller.active_view();
    let selected_count = s.controller.selected_ids().len();
    let all_selected = s.controller.all_on_page_selected();
    let toast_state = s.toast.clone();
    let form_state = form.read().clone();

    let empty = if s.is_loading {
        Some((EmptyStateKind::Loading, None))
    } else if s.controller.rows().is_empty() {
        match &s.load_error {
            Some(message) => Some((EmptyStateKind::LoadFailed, Some(message.clone()))),
            None => Some((EmptyStateKind::NoRows, None)),
        }
    } else if visible.is_empty() {
        let detail = (!query.is_empty()).then(|| format!("Search: \"{}\"", query));
        Some((EmptyStateKind::NoMatches, detail))
    } else {
        None
    };

    let footer_shortcuts = if s.search_focused {
        shortcuts([("Enter", "Apply"), ("Esc", "Clear & Exit"), ("C-q", "Quit")])
    } else if s.filter_panel.is_some() {
        shortcuts([
            ("j/k", "Choice"),
            ("Tab", "Filter"),
            ("Space", "Toggle"),
            ("x", "Clear Filter"),
            ("C", "Clear All"),
            ("Esc", "Close"),
        ])
    } else if s.sort_menu.is_some() {
        shortcuts([("j/k", "Navigate"), ("Enter", "Apply"), ("Esc", "Close")])
    } else {
        shortcuts([
            ("j/k", "Up/Down"),
            ("Tab", "Views"),
            ("Space", "Select"),
            ("a", "Select All"),
            ("/", "Search"),
            ("f", "Filter"),
            ("s", "Sort"),
            ("n/r/d/D", "View Ops"),
            ("o", "New Order"),
            ("R", "Refresh"),
            ("q", "Quit"),
        ])
    };

    let count_label = format!("{} of {} orders", visible.len(), s.controller.rows().len());
    let selection_label = if selected_count > 0 {
        let suffix = if all_selected { " (all on page)" } else { "" };
        Some(format!("{} selected{}", selected_count, suffix))
    } else {
        None
    };

    let prompt_state = s.prompt.clone();
    let filter_panel_state = s.filter_panel;
    let sort_menu_state = s.sort_menu;
    let filter_defs = s.filter_defs.clone();
    let sort_options = s.sort_options.clone();
    let filter_values: Vec<Vec<String>> = filter_defs
        .iter()
        .map(|def| s.controller.filter_values(def.key))
        .collect();

    let query_state = state.clone();
    let prompt_input_state = state.clone();
    let form_input = form.clone();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: "Orders".to_string(),
                shop: Some(shop.to_string()),
                count_label: Some(count_label),
            )

            TabBar(views: views, active_index: active_view, saving: s.view_saving)

            SearchBox(
                value: Some(search_value),
                has_focus: s.search_focused,
                on_change: Some(Handler::from(move |text: String| {
                    let mut target = query_state.clone();
                    let mut next = target.read().clone();
                    reduce(&mut next, ListAction::SetQuery(text), 0);
                    target.set(next);
                })),
            )

            FilterChips(chips: chips, query: query.clone())

            View(flex_grow: 1.0, width: 100pct) {
                #(Some(match &empty {
                    Some((kind, detail)) => element! {
                        EmptyState(kind: *kind, detail: detail.clone())
                    }.into_any(),
                    None => element! {
                        DataTable(
                            columns: model::columns(),
                            rows: rows.clone(),
                            highlighted_index: s.selected_index,
                            scroll_offset: s.scroll_offset,
                            visible_height: list_height,
                        )
                    }.into_any(),
                }))
            }

            #(selection_label.map(|label| element! {
                View(width: 100pct, height: 1, padding_left: 1) {
                    Text(content: label, color: theme.accent)
                }
            }))

            Footer(shortcuts: footer_shortcuts)

            #(render_toast(&toast_state))

            // View-name prompt
            #(prompt_state.map(|prompt| {
                let title = match prompt.kind {
                    PromptKind::CreateView => "New view",
                    PromptKind::RenameView(_) => "Rename view",
                    PromptKind::DuplicateView => "Duplicate view",
                };
                let mut target = prompt_input_state.clone();
                element! {
                    ModalOverlay(show_backdrop: true) {
                        ModalContainer(
                            title: title.to_string(),
                            footer_text: "Enter to save, Esc to cancel".to_string(),
                        ) {
                            TextInput(
                                value: prompt.value.clone(),
                                has_focus: true,
                                on_change: move |text: String| {
                                    let mut next = target.read().clone();
                                    reduce(&mut next, ListAction::SetPromptValue(text), 0);
                                    target.set(next);
                                },
                            )
                        }
                    }
                }
            }))

            // Filter panel
            #(filter_panel_state.map(|panel| element! {
                ModalOverlay(show_backdrop: true) {
                    ModalContainer(
                        title: "Filters".to_string(),
                        footer_text: "Space to toggle, Tab to switch filter, Esc to close".to_string(),
                    ) {
                        #(filter_defs.iter().enumerate().map(|(group_idx, def)| {
                            let active_group = group_idx == panel.group_index;
                            let chosen = filter_values[group_idx].clone();
                            element! {
                                View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                                    Text(
                                        content: def.label,
                                        color: if active_group { theme.accent } else { theme.text_dimmed },
                                        weight: Weight::Bold,
                                    )
                                    #(def.choices.iter().enumerate().map(|(choice_idx, choice)| {
                                        let checked = chosen.iter().any(|v| v == choice.value);
                                        let cursor = active_group && choice_idx == panel.choice_index;
                                        element! {
                                            Text(
                                                content: format!(
                                                    "{} [{}] {}",
                                                    if cursor { ">" } else { " " },
                                                    if checked { "x" } else { " " },
                                                    choice.label,
                                                ),
                                                color: if cursor { theme.text } else { theme.text_dimmed },
                                            )
                                        }
                                    }))
                                }
                            }
                        }))
                    }
                }
            }))

            // Sort menu
            #(sort_menu_state.map(|menu| element! {
                ModalOverlay(show_backdrop: true) {
                    ModalContainer(
                        title: "Sort by".to_string(),
                        footer_text: "Enter to apply, Esc to close".to_string(),
                    ) {
                        #(sort_options.iter().enumerate().map(|(idx, opt)| {
                            let cursor = idx == menu.index;
                            element! {
                                Text(
                                    content: format!(
                                        "{} {} ({})",
                                        if cursor { ">" } else { " " },
                                        opt.label,
                                        opt.direction_label,
                                    ),
                                    color: if cursor { theme.text } else { theme.text_dimmed },
                                )
                            }
                        }))
                    }
                }
            }))

            // Order creation form
            #(form_state.map(|open| {
                let target = form_input.clone();
                let focused = open.focused;
                let fields = [
                    ("Customer id", open.customer_id.clone(), OrderField::CustomerId),
                    ("Product id", open.product_id.clone(), OrderField::ProductId),
                    ("Quantity", open.quantity.clone(), OrderField::Quantity),
                    ("Price", open.price.clone(), OrderField::Price),
                ];
                element! {
                    ModalOverlay(show_backdrop: true) {
                        ModalContainer(
                            title: "Create order".to_string(),
                            footer_text: "Tab to move, Enter to submit, Esc to cancel".to_string(),
                        ) {
                            #(fields.into_iter().map(|(label, value, field)| {
                                let mut target = target.clone();
                                let has_focus = focused == field && !open.submitting;
                                element! {
                                    View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                                        Text(content: label, color: theme.text_dimmed)
                                        View(
                                            border_style: BorderStyle::Round,
                                            border_color: if has_focus {
                                                theme.border_focused
                                            } else {
                                                theme.border
                                            },
                                            padding_left: 1,
                                        ) {
                                            TextInput(
                                                value: value,
                                                has_focus: has_focus,
                                                on_change: move |text: String| {
                                                    let mut next = target.read().clone();
                                                    if let Some(editing) = next.as_mut() {
                                                        match field {
                                                            OrderField::CustomerId => editing.customer_id = text,
                                                            OrderField::ProductId => editing.product_id = text,
                                                            OrderField::Quantity => editing.quantity = text,
                                                            OrderField::Price => editing.price = text,
                                                        }
                                                    }
                                                    target.set(next);
                                                },
                                            )
                                        }
                                    }
                                }
                            }))

                            #(open.submitting.then(|| element! {
                                Text(content: "Creating order...", color: theme.text_dimmed)
                            }))

                            #(open.error.clone().map(|message| element! {
                                Text(content: message, color: theme.error)
                            }))
                        }
                    }
                }
            }))
        }
    }
}
