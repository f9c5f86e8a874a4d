//! The list-view state controller.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::time::Duration;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::types::{
    AppliedFilter, ListRow, SavedView, SortDirection, SortSelection,
};

/// Artificial delay standing in for the saved-view persistence round-trip.
/// There is no cancellation path; the commit happens when the delay elapses.
const VIEW_SAVE_DELAY: Duration = Duration::from_millis(500);

/// Simulate the asynchronous saved-view save.
///
/// UI handlers await this before committing a `create_view`, so the tab bar
/// shows a brief pending state the way a real persistence layer would.
pub async fn simulate_view_save() {
    tokio::time::sleep(VIEW_SAVE_DELAY).await;
}

/// Owns the tab/filter/sort/query/selection state for one list screen.
///
/// All operations are pure state replacements over the already-loaded page;
/// none of them re-fetch from the gateway. Nothing here is persisted - a
/// reload resets the controller to its defaults.
#[derive(Debug, Clone)]
pub struct ListViewController<R: ListRow> {
    rows: Vec<R>,
    views: Vec<SavedView>,
    active_view: usize,
    sort: SortSelection,
    /// Filter key -> chosen values. A key with an empty set is removed
    /// outright so it can never render as an applied chip.
    filters: BTreeMap<String, BTreeSet<String>>,
    query: String,
    selected_ids: HashSet<String>,
    all_on_page: bool,
}

impl<R: ListRow> ListViewController<R> {
    /// Create a controller with the given tab labels and default sort.
    /// The first label becomes the locked default view.
    pub fn new(view_names: &[&str], default_sort: SortSelection) -> Self {
        let views = view_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    SavedView::locked(*name)
                } else {
                    SavedView::new(*name)
                }
            })
            .collect();

        Self {
            rows: Vec::new(),
            views,
            active_view: 0,
            sort: default_sort,
            filters: BTreeMap::new(),
            query: String::new(),
            selected_ids: HashSet::new(),
            all_on_page: false,
        }
    }

    // --- Rows ---

    /// Replace the loaded page of rows, reconciling the selection so it
    /// stays a subset of the identifiers actually present.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let ids: HashSet<&str> = self.rows.iter().map(|r| r.row_id()).collect();
        self.selected_ids.retain(|id| ids.contains(id.as_str()));
        self.all_on_page =
            !self.rows.is_empty() && self.selected_ids.len() == self.rows.len();
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Rows after applying filters, the free-text query, and the sort.
    pub fn visible_rows(&self) -> Vec<R> {
        let matcher = SkimMatcherV2::default().smart_case();

        let mut visible: Vec<R> = self
            .rows
            .iter()
            .filter(|row| self.row_passes_filters(*row))
            .filter(|row| {
                self.query.is_empty()
                    || matcher
                        .fuzzy_match(&row.search_text(), &self.query)
                        .is_some()
            })
            .cloned()
            .collect();

        let field = self.sort.field.clone();
        visible.sort_by(|a, b| {
            let ordering = a.sort_key(&field).cmp(&b.sort_key(&field));
            match self.sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        visible
    }

    fn row_passes_filters(&self, row: &R) -> bool {
        self.filters.iter().all(|(key, values)| {
            match row.filter_value(key) {
                Some(value) => values.contains(&value),
                None => false,
            }
        })
    }

    // --- Saved views ---

    pub fn views(&self) -> &[SavedView] {
        &self.views
    }

    pub fn active_view(&self) -> usize {
        self.active_view
    }

    pub fn set_active_view(&mut self, index: usize) {
        if index < self.views.len() {
            self.active_view = index;
        }
    }

    /// Append a new unlocked view and make it active. Returns its index.
    pub fn create_view(&mut self, name: impl Into<String>) -> usize {
        self.views.push(SavedView::new(name));
        self.active_view = self.views.len() - 1;
        self.active_view
    }

    /// Rename the view at `index` in place, preserving order.
    /// Returns false (a no-op) for the locked view or an out-of-range index.
    pub fn rename_view(&mut self, index: usize, new_name: impl Into<String>) -> bool {
        match self.views.get_mut(index) {
            Some(view) if !view.locked => {
                view.name = new_name.into();
                true
            }
            _ => false,
        }
    }

    /// Append a copy at the end of the sequence (not adjacent to its source)
    /// and activate it. Returns the new index.
    pub fn duplicate_view(&mut self, name: impl Into<String>) -> usize {
        self.create_view(name)
    }

    /// Remove the view at `index`. The active view shifts to the locked
    /// default regardless of the prior active position. Removing the locked
    /// view is a no-op; the UI never offers the action for it.
    pub fn delete_view(&mut self, index: usize) {
        if index == 0 || index >= self.views.len() {
            return;
        }
        self.views.remove(index);
        self.active_view = 0;
    }

    // --- Sort ---

    pub fn sort(&self) -> &SortSelection {
        &self.sort
    }

    pub fn set_sort(&mut self, selection: SortSelection) {
        self.sort = selection;
    }

    // --- Filters ---

    /// Replace the chosen values for a filter key. An empty value set is
    /// equivalent to removing the filter.
    pub fn set_filter(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        if values.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, values.into_iter().collect());
        }
    }

    pub fn remove_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
        self.query.clear();
    }

    pub fn filter_values(&self, key: &str) -> Vec<String> {
        self.filters
            .get(key)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Applied-filter chips: one per key with a non-empty value set.
    pub fn applied_filters(&self) -> Vec<AppliedFilter> {
        self.filters
            .iter()
            .map(|(key, values)| AppliedFilter {
                key: key.clone(),
                label: format!(
                    "{}: {}",
                    key,
                    values.iter().cloned().collect::<Vec<_>>().join(", ")
                ),
            })
            .collect()
    }

    // --- Free-text query ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    // --- Selection ---

    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Whether every row on the loaded page is selected.
    pub fn all_on_page_selected(&self) -> bool {
        self.all_on_page
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if self.selected_ids.contains(id) {
            self.selected_ids.remove(id);
            self.all_on_page = false;
        } else if self.rows.iter().any(|r| r.row_id() == id) {
            self.selected_ids.insert(id.to_string());
            self.all_on_page = self.selected_ids.len() == self.rows.len();
        }
    }

    /// Select every row on the loaded page. ("All matching" across server
    /// pages is out of scope; only the page-level flag is tracked.)
    pub fn select_all(&mut self) {
        self.selected_ids = self.rows.iter().map(|r| r.row_id().to_string()).collect();
        self.all_on_page = !self.rows.is_empty();
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
        self.all_on_page = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listview::types::SortDirection;

    #[derive(Debug, Clone)]
    struct TestRow {
        id: String,
        name: String,
        tone: Option<String>,
    }

    impl TestRow {
        fn new(id: &str, name: &str, tone: Option<&str>) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                tone: tone.map(String::from),
            }
        }
    }

    impl ListRow for TestRow {
        fn row_id(&self) -> &str {
            &self.id
        }

        fn search_text(&self) -> String {
            format!("{} {}", self.id, self.name)
        }

        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "tone" => self.tone.clone(),
                _ => None,
            }
        }

        fn sort_key(&self, field: &str) -> String {
            match field {
                "name" => self.name.to_lowercase(),
                _ => self.id.clone(),
            }
        }
    }

    fn controller_with_rows(rows: Vec<TestRow>) -> ListViewController<TestRow> {
        let mut controller = ListViewController::new(
            &["All", "Active", "Draft"],
            SortSelection::ascending("name"),
        );
        controller.set_rows(rows);
        controller
    }

    #[test]
    fn test_first_view_is_locked() {
        let controller = controller_with_rows(vec![]);
        assert!(controller.views()[0].locked);
        assert!(!controller.views()[1].locked);
    }

    #[test]
    fn test_rename_locked_view_is_noop() {
        let mut controller = controller_with_rows(vec![]);
        assert!(!controller.rename_view(0, "Renamed"));
        assert_eq!(controller.views()[0].name, "All");
    }

    #[test]
    fn test_rename_unlocked_view() {
        let mut controller = controller_with_rows(vec![]);
        assert!(controller.rename_view(1, "Live"));
        assert_eq!(controller.views()[1].name, "Live");
        // Order preserved
        assert_eq!(controller.views()[2].name, "Draft");
    }

    #[test]
    fn test_rename_out_of_range() {
        let mut controller = controller_with_rows(vec![]);
        assert!(!controller.rename_view(99, "Nope"));
    }

    #[test]
    fn test_delete_view_resets_active_to_default() {
        let mut controller = controller_with_rows(vec![]);
        controller.set_active_view(2);
        controller.delete_view(1);
        assert_eq!(controller.active_view(), 0);
        assert_eq!(controller.views().len(), 2);
    }

    #[test]
    fn test_delete_locked_view_is_noop() {
        let mut controller = controller_with_rows(vec![]);
        controller.delete_view(0);
        assert_eq!(controller.views().len(), 3);
        assert_eq!(controller.views()[0].name, "All");
    }

    #[test]
    fn test_create_view_appends_and_activates() {
        let mut controller = controller_with_rows(vec![]);
        let index = controller.create_view("Custom");
        assert_eq!(index, 3);
        assert_eq!(controller.active_view(), 3);
        assert!(!controller.views()[3].locked);
    }

    #[test]
    fn test_duplicate_view_appends_at_end_and_activates() {
        let mut controller = controller_with_rows(vec![]);
        controller.set_active_view(1);
        let index = controller.duplicate_view("Active copy");
        assert_eq!(index, controller.views().len() - 1);
        assert_eq!(controller.active_view(), index);
        assert_eq!(controller.views()[index].name, "Active copy");
    }

    #[test]
    fn test_chip_iff_nonempty_values() {
        let mut controller = controller_with_rows(vec![]);
        assert!(controller.applied_filters().is_empty());

        controller.set_filter("tone", vec!["active".to_string(), "draft".to_string()]);
        let chips = controller.applied_filters();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "tone: active, draft");

        // Empty value set is equivalent to absent
        controller.set_filter("tone", vec![]);
        assert!(controller.applied_filters().is_empty());
    }

    #[test]
    fn test_remove_filter_clears_only_that_key() {
        let mut controller = controller_with_rows(vec![]);
        controller.set_filter("tone", vec!["active".to_string()]);
        controller.set_filter("type", vec!["brew-gear".to_string()]);

        controller.remove_filter("tone");
        let chips = controller.applied_filters();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "type");
    }

    #[test]
    fn test_clear_all_filters_also_clears_query() {
        let mut controller = controller_with_rows(vec![]);
        controller.set_filter("tone", vec!["active".to_string()]);
        controller.set_query("mug");

        controller.clear_all_filters();
        assert!(controller.applied_filters().is_empty());
        assert!(controller.query().is_empty());
    }

    #[test]
    fn test_filter_hides_rows_without_matching_value() {
        let rows = vec![
            TestRow::new("1", "Mug", Some("draft")),
            TestRow::new("2", "Kettle", None),
        ];
        let mut controller = controller_with_rows(rows);
        controller.set_filter("tone", vec!["active".to_string()]);

        // No rows match, but the chip is still applied and removable
        assert!(controller.visible_rows().is_empty());
        assert_eq!(controller.applied_filters()[0].label, "tone: active");
    }

    #[test]
    fn test_query_filters_rows() {
        let rows = vec![
            TestRow::new("1", "Coffee Mug", None),
            TestRow::new("2", "Kettle", None),
        ];
        let mut controller = controller_with_rows(rows);
        controller.set_query("mug");

        let visible = controller.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_sort_direction() {
        let rows = vec![
            TestRow::new("1", "Banana", None),
            TestRow::new("2", "Apple", None),
        ];
        let mut controller = controller_with_rows(rows);

        let visible = controller.visible_rows();
        assert_eq!(visible[0].name, "Apple");

        controller.set_sort(SortSelection::new("name", SortDirection::Descending));
        let visible = controller.visible_rows();
        assert_eq!(visible[0].name, "Banana");
    }

    #[test]
    fn test_select_all_covers_loaded_page() {
        let rows = vec![
            TestRow::new("1", "Mug", None),
            TestRow::new("2", "Kettle", None),
        ];
        let mut controller = controller_with_rows(rows);
        controller.select_all();

        assert_eq!(controller.selected_ids().len(), 2);
        assert!(controller.all_on_page_selected());
    }

    #[test]
    fn test_toggle_selection_round_trip() {
        let rows = vec![TestRow::new("1", "Mug", None)];
        let mut controller = controller_with_rows(rows);

        controller.toggle_selection("1");
        assert!(controller.is_selected("1"));
        controller.toggle_selection("1");
        assert!(!controller.is_selected("1"));
        assert!(controller.selected_ids().is_empty());
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut controller = controller_with_rows(vec![TestRow::new("1", "Mug", None)]);
        controller.toggle_selection("missing");
        assert!(controller.selected_ids().is_empty());
    }

    #[test]
    fn test_set_rows_reconciles_selection() {
        let mut controller = controller_with_rows(vec![
            TestRow::new("1", "Mug", None),
            TestRow::new("2", "Kettle", None),
        ]);
        controller.select_all();

        controller.set_rows(vec![TestRow::new("2", "Kettle", None)]);
        assert_eq!(
            controller.selected_ids().iter().collect::<Vec<_>>(),
            vec!["2"]
        );
        assert!(controller.all_on_page_selected());
    }
}
