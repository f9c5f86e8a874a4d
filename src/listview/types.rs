//! Shared types for the list-view controller.

/// A named, reusable filter/sort preset shown as a tab.
///
/// Saved views live only in page-session state; a reload resets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedView {
    /// Display label.
    pub name: String,
    /// The first/default view is locked: it can never be renamed or deleted.
    pub locked: bool,
}

impl SavedView {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locked: false,
        }
    }

    pub fn locked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locked: true,
        }
    }
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The single active (field, direction) sort choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelection {
    /// Field key, matched against [`ListRow::sort_key`].
    pub field: String,
    pub direction: SortDirection,
}

impl SortSelection {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }
}

/// A selectable sort choice offered by a screen.
#[derive(Debug, Clone)]
pub struct SortOption {
    /// Display label, e.g. "Order".
    pub label: &'static str,
    /// Field key handed to the controller.
    pub field: &'static str,
    pub direction: SortDirection,
    /// Direction label, e.g. "Ascending" or "A-Z".
    pub direction_label: &'static str,
}

/// One choice inside a multi-select filter.
#[derive(Debug, Clone)]
pub struct FilterChoice {
    pub label: &'static str,
    pub value: &'static str,
}

/// A multi-select filter a screen offers, e.g. status or type.
#[derive(Debug, Clone)]
pub struct FilterDefinition {
    /// Stable key, e.g. "tone" or "type".
    pub key: &'static str,
    /// Display label, e.g. "Status".
    pub label: &'static str,
    pub choices: Vec<FilterChoice>,
}

/// An applied-filter chip derived from a non-empty filter selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    pub key: String,
    /// `"<key>: <value1>, <value2>"`.
    pub label: String,
}

/// A row the list-view controller can filter, sort, and select.
pub trait ListRow: Clone {
    /// Identifier, unique within one page load.
    fn row_id(&self) -> &str;

    /// Text the free-text query matches against.
    fn search_text(&self) -> String;

    /// The value this row carries for a filter key, if any.
    fn filter_value(&self, key: &str) -> Option<String>;

    /// Comparable key for a sort field. Numeric fields should return a
    /// fixed-width padded representation so lexicographic order matches
    /// numeric order.
    fn sort_key(&self, field: &str) -> String;
}
