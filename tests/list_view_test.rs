//! List-view controller behavior through the public crate API.

use storekeep::{FilterChoice, ListRow, ListViewController, SortDirection, SortSelection};

#[derive(Debug, Clone)]
struct Item {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
}

impl ListRow for Item {
    fn row_id(&self) -> &str {
        self.id
    }
    fn search_text(&self) -> String {
        self.name.to_string()
    }
    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "kind" => Some(self.kind.to_string()),
            _ => None,
        }
    }
    fn sort_key(&self, _field: &str) -> String {
        self.name.to_lowercase()
    }
}

fn items() -> Vec<Item> {
    vec![
        Item { id: "1", name: "Travel Mug", kind: "drinkware" },
        Item { id: "2", name: "Pour-Over Kettle", kind: "brew-gear" },
        Item { id: "3", name: "Filter Papers", kind: "brew-gear" },
    ]
}

fn controller() -> ListViewController<Item> {
    let mut c = ListViewController::new(&["All", "Gear"], SortSelection::ascending("name"));
    c.set_rows(items());
    c
}

// ============================================================================
// Saved views
// ============================================================================

#[test]
fn test_first_view_is_locked_and_survives_deletion_attempts() {
    let mut c = controller();
    assert!(c.views()[0].locked);
    assert!(!c.views()[1].locked);

    c.delete_view(0);
    assert_eq!(c.views().len(), 2);
}

#[test]
fn test_created_view_becomes_active() {
    let mut c = controller();
    let index = c.create_view("Drinkware");
    assert_eq!(index, 2);
    assert_eq!(c.active_view(), 2);
    assert_eq!(c.views()[2].name, "Drinkware");
    assert!(!c.views()[2].locked);
}

#[test]
fn test_duplicate_appends_at_end_and_activates() {
    let mut c = controller();
    c.set_active_view(0);
    let index = c.duplicate_view("Copy of All");
    assert_eq!(index, c.views().len() - 1);
    assert_eq!(c.active_view(), index);
    assert_eq!(c.views()[index].name, "Copy of All");
}

#[test]
fn test_rename_refuses_locked_view() {
    let mut c = controller();
    assert!(!c.rename_view(0, "Everything"));
    assert_eq!(c.views()[0].name, "All");

    assert!(c.rename_view(1, "Equipment"));
    assert_eq!(c.views()[1].name, "Equipment");
}

#[test]
fn test_deleting_active_view_falls_back_to_first() {
    let mut c = controller();
    c.set_active_view(1);
    c.delete_view(1);
    assert_eq!(c.active_view(), 0);
    assert_eq!(c.views().len(), 1);
}

// ============================================================================
// Filters, query, sort
// ============================================================================

#[test]
fn test_applied_filters_join_values() {
    let mut c = controller();
    c.set_filter("kind", vec!["brew-gear".to_string(), "drinkware".to_string()]);
    let chips = c.applied_filters();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].label, "kind: brew-gear, drinkware");
    assert_eq!(c.visible_rows().len(), 3);

    c.set_filter("kind", vec!["brew-gear".to_string()]);
    assert_eq!(c.visible_rows().len(), 2);
}

#[test]
fn test_setting_empty_filter_removes_it() {
    let mut c = controller();
    c.set_filter("kind", vec!["brew-gear".to_string()]);
    c.set_filter("kind", vec![]);
    assert!(c.applied_filters().is_empty());
    assert_eq!(c.visible_rows().len(), 3);
}

#[test]
fn test_fuzzy_query_is_case_insensitive_for_lowercase_input() {
    let mut c = controller();
    c.set_query("kettle");
    let visible = c.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
}

#[test]
fn test_clear_all_filters_clears_query_too() {
    let mut c = controller();
    c.set_filter("kind", vec!["drinkware".to_string()]);
    c.set_query("mug");
    c.clear_all_filters();
    assert!(c.applied_filters().is_empty());
    assert_eq!(c.query(), "");
    assert_eq!(c.visible_rows().len(), 3);
}

#[test]
fn test_sort_direction_flips_order() {
    let mut c = controller();
    let ascending: Vec<_> = c.visible_rows().iter().map(|i| i.id).collect();
    assert_eq!(ascending, ["3", "2", "1"]);

    c.set_sort(SortSelection::new("name", SortDirection::Descending));
    let descending: Vec<_> = c.visible_rows().iter().map(|i| i.id).collect();
    assert_eq!(descending, ["1", "2", "3"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_toggle_unknown_id_is_ignored() {
    let mut c = controller();
    c.toggle_selection("missing");
    assert!(c.selected_ids().is_empty());
}

#[test]
fn test_toggle_twice_restores_prior_selection() {
    let mut c = controller();
    c.toggle_selection("2");
    let before = c.selected_ids().clone();
    c.toggle_selection("1");
    c.toggle_selection("1");
    assert_eq!(*c.selected_ids(), before);
}

#[test]
fn test_select_all_covers_the_loaded_page() {
    let mut c = controller();
    c.select_all();
    assert_eq!(c.selected_ids().len(), 3);
    assert!(c.all_on_page_selected());

    c.toggle_selection("1");
    assert!(!c.all_on_page_selected());
}

#[test]
fn test_filter_choice_fields_are_static() {
    let choice = FilterChoice { label: "Brew gear", value: "brew-gear" };
    assert_eq!(choice.label, "Brew gear");
}
