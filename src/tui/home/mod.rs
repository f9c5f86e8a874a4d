//! Home menu: pick a screen.

use std::sync::{Arc, Mutex};

use iocraft::prelude::*;

use crate::tui::Screen;
use crate::tui::components::footer::shortcuts;
use crate::tui::components::{Footer, Header};
use crate::tui::theme::theme;

const MENU: [(Screen, &str, &str); 4] = [
    (Screen::Orders, "Orders", "Browse, filter, and create orders"),
    (Screen::Inventory, "Inventory", "Browse inventory items"),
    (Screen::Products, "Products", "Edit product titles and descriptions"),
    (Screen::Analytics, "Analytics", "Revenue over a date range"),
];

/// Props for the HomeScreen component
#[derive(Default, Props)]
pub struct HomeScreenProps {
    /// Receives the chosen screen; stays `None` when the user quits.
    pub outcome: Option<Arc<Mutex<Option<Screen>>>>,
}

/// Landing menu listing the available screens
#[component]
pub fn HomeScreen(props: &HomeScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut cursor = hooks.use_state(|| 0usize);
    let mut should_exit = hooks.use_state(|| false);

    let outcome = props.outcome.clone();

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                match code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        cursor.set((cursor.get() + 1).min(MENU.len() - 1));
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        cursor.set(cursor.get().saturating_sub(1));
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = (c as usize) - ('1' as usize);
                        if let Some(outcome) = outcome.as_ref()
                            && let Ok(mut chosen) = outcome.lock()
                        {
                            *chosen = Some(MENU[index].0);
                        }
                        should_exit.set(true);
                    }
                    KeyCode::Enter => {
                        if let Some(outcome) = outcome.as_ref()
                            && let Ok(mut chosen) = outcome.lock()
                        {
                            *chosen = Some(MENU[cursor.get()].0);
                        }
                        should_exit.set(true);
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_exit.set(true);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let selected = cursor.get();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(title: "Home".to_string())

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                View(flex_direction: FlexDirection::Column, width: 60) {
                    #(MENU.iter().enumerate().map(|(i, (_, name, blurb))| {
                        let is_cursor = i == selected;
                        element! {
                            View(
                                flex_direction: FlexDirection::Column,
                                padding_left: 1,
                                margin_bottom: 1,
                                background_color: if is_cursor {
                                    Some(theme.highlight)
                                } else {
                                    None
                                },
                            ) {
                                Text(
                                    content: format!("{}. {}", i + 1, name),
                                    color: if is_cursor { theme.background } else { theme.text },
                                    weight: Weight::Bold,
                                )
                                Text(
                                    content: *blurb,
                                    color: if is_cursor { theme.background } else { theme.text_dimmed },
                                )
                            }
                        }
                    }))
                }
            }

            Footer(shortcuts: shortcuts([
                ("j/k", "Up/Down"),
                ("Enter", "Open"),
                ("1-4", "Jump"),
                ("q", "Quit"),
            ]))
        }
    }
}
