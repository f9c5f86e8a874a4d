//! Orders screen scenarios driven through the shared list state machine.
//!
//! These complement the unit tests in `src/tui/list_screen.rs` and
//! `src/tui/orders/model.rs`: each test walks a whole interaction the way
//! the screen does, from key event to rendered cells.

mod common;

use common::{OrderBuilder, mock_order};
use storekeep::SortSelection;
use storekeep::tui::list_screen::{ListAction, key_to_action, reduce};
use storekeep::tui::orders::{default_state, row_cells};

use iocraft::prelude::{KeyCode, KeyModifiers};

const LIST_HEIGHT: usize = 10;

fn press(state: &mut storekeep::tui::list_screen::ListScreenState<storekeep::Order>, code: KeyCode) {
    let mode = state.mode();
    if let Some(action) = key_to_action(code, KeyModifiers::NONE, &mode) {
        reduce(state, action, LIST_HEIGHT);
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_missing_customer_and_channel_render_placeholders() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_order("1", "#1001"),
        OrderBuilder::new("2", "#1002")
            .customer(None)
            .channel(None)
            .build(),
    ]);

    let rows: Vec<_> = state
        .visible()
        .iter()
        .map(|order| row_cells(order, false))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[2], "Ada");
    assert_eq!(rows[1].cells[2], "No customer");
    assert_eq!(rows[1].cells[3], "No channel");
}

#[test]
fn test_total_cell_carries_currency_prefix() {
    let order = OrderBuilder::new("1", "#1001").total("249.95").build();
    let row = row_cells(&order, true);
    assert_eq!(row.cells[4], "$249.95");
    assert!(row.checked);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_status_filter_with_no_matches_keeps_removable_chip() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_order("1", "#1001"),
        OrderBuilder::new("2", "#1002").financial("PENDING").build(),
    ]);

    // f opens the panel on the status group; Space toggles "active"
    press(&mut state, KeyCode::Char('f'));
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Esc);

    // No order matches the choice: the list empties but the chip stays
    assert!(state.visible().is_empty());
    let chips = state.controller.applied_filters();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].label, "tone: active");

    // C clears everything and the rows come back
    press(&mut state, KeyCode::Char('C'));
    assert!(state.controller.applied_filters().is_empty());
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn test_multiple_choices_join_into_one_chip() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_order("1", "#1001"),
        OrderBuilder::new("2", "#1002").financial("PENDING").build(),
    ]);

    // Toggle "active" and "draft" within the same group
    press(&mut state, KeyCode::Char('f'));
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Esc);

    let chips = state.controller.applied_filters();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].label, "tone: active, draft");

    // x on the group clears just that chip
    press(&mut state, KeyCode::Char('f'));
    press(&mut state, KeyCode::Char('x'));
    assert!(state.controller.applied_filters().is_empty());
    assert_eq!(state.visible().len(), 2);
}

// ============================================================================
// Search and sort
// ============================================================================

#[test]
fn test_search_matches_customer_name() {
    let mut state = default_state();
    state.rows_loaded(vec![
        mock_order("1", "#1001"),
        OrderBuilder::new("2", "#1002").customer(Some("Grace")).build(),
    ]);

    press(&mut state, KeyCode::Char('/'));
    assert!(state.mode().search_focused);
    reduce(&mut state, ListAction::SetQuery("grace".into()), LIST_HEIGHT);
    press(&mut state, KeyCode::Enter);

    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");

    // Esc from the focused box clears the query entirely
    press(&mut state, KeyCode::Char('/'));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn test_totals_sort_numerically_not_lexically() {
    let mut state = default_state();
    state.rows_loaded(vec![
        OrderBuilder::new("1", "#1001").total("100.00").build(),
        OrderBuilder::new("2", "#1002").total("9.50").build(),
    ]);

    state.controller.set_sort(SortSelection::ascending("total"));
    let visible = state.visible();
    assert_eq!(visible[0].total_amount, "9.50");
    assert_eq!(visible[1].total_amount, "100.00");
}

// ============================================================================
// Saved views
// ============================================================================

#[test]
fn test_create_view_round_trip_from_keys() {
    let mut state = default_state();
    state.rows_loaded(vec![mock_order("1", "#1001")]);

    press(&mut state, KeyCode::Char('n'));
    reduce(
        &mut state,
        ListAction::SetPromptValue("High value".into()),
        LIST_HEIGHT,
    );
    press(&mut state, KeyCode::Enter);

    // The save is in flight until the view commits it
    assert!(state.view_saving);
    assert_eq!(state.controller.views().len(), 3);

    let (kind, name) = state.pending_view.take().unwrap();
    reduce(
        &mut state,
        ListAction::CommitViewSave { kind, name },
        LIST_HEIGHT,
    );
    assert!(!state.view_saving);
    assert_eq!(state.controller.views().len(), 4);
    assert_eq!(state.controller.views()[3].name, "High value");
    assert_eq!(state.controller.active_view(), 3);
}

#[test]
fn test_default_view_cannot_be_deleted() {
    let mut state = default_state();
    state.rows_loaded(vec![mock_order("1", "#1001")]);

    press(&mut state, KeyCode::Char('D'));
    assert_eq!(state.controller.views().len(), 3);
    assert!(state.toast.is_some());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selection_survives_view_switch_but_not_row_removal() {
    let mut state = default_state();
    state.rows_loaded(vec![mock_order("1", "#1001"), mock_order("2", "#1002")]);

    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.controller.selected_ids().len(), 1);

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.controller.selected_ids().len(), 1);

    // A reload that drops the selected row drops the selection too
    state.rows_loaded(vec![mock_order("2", "#1002")]);
    assert!(!state.controller.is_selected("1"));
    assert!(state.controller.selected_ids().is_empty());
}
