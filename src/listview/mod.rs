//! Reusable list-view state controller.
//!
//! The orders and inventory screens share identical tab/filter/sort/selection
//! machinery. Instead of duplicating that state handling per screen, this
//! module owns it once: [`ListViewController`] is parameterized by a row type
//! ([`ListRow`]) and per-screen [`FilterDefinition`]s, and the screens only
//! provide column rendering on top.

mod controller;
mod types;

pub use controller::{ListViewController, simulate_view_save};
pub use types::{
    AppliedFilter, FilterChoice, FilterDefinition, ListRow, SavedView, SortDirection,
    SortOption, SortSelection,
};
