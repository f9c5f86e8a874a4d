//! Inventory screen scenarios driven through the shared list state machine.

mod common;

use common::mock_inventory_item;
use storekeep::InventoryItem;
use storekeep::tui::inventory::{default_state, row_cells};
use storekeep::tui::list_screen::{ListScreenState, key_to_action, reduce};

use iocraft::prelude::{KeyCode, KeyModifiers};

const LIST_HEIGHT: usize = 10;

fn press(state: &mut ListScreenState<InventoryItem>, code: KeyCode) {
    let mode = state.mode();
    if let Some(action) = key_to_action(code, KeyModifiers::NONE, &mode) {
        reduce(state, action, LIST_HEIGHT);
    }
}

#[test]
fn test_status_filter_empties_list_but_chip_stays_removable() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_inventory_item("1", Some("BG-1"), "Brew Gear"),
        mock_inventory_item("2", None, "Brew Merch"),
    ]);

    // f opens the panel on the type group; Tab moves to the status group
    press(&mut state, KeyCode::Char('f'));
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char(' '));

    // No item carries a status, so "active" matches nothing
    assert!(state.visible().is_empty());
    let chips = state.controller.applied_filters();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].label, "tone: active");

    // x clears just that group and the rows come back
    press(&mut state, KeyCode::Char('x'));
    assert!(state.controller.applied_filters().is_empty());
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn test_missing_sku_sorts_and_renders_with_placeholder() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_inventory_item("1", Some("BG-1"), "Brew Gear"),
        mock_inventory_item("2", None, "Brew Merch"),
    ]);

    let rows: Vec<_> = state
        .visible()
        .iter()
        .map(|item| row_cells(item, false))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|row| row.cells[0] == "No SKU"));
}
