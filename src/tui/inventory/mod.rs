//! Inventory screen: the same list machinery as orders over inventory items.

mod model;
mod view;

pub use model::{columns, default_state, row_cells};
pub use view::InventoryScreen;
