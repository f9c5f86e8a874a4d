//! Orders screen: saved views, filters, search, sort, bulk selection, and
//! an order creation form.

mod model;
mod view;

pub use model::{CreateOrderForm, OrderField, columns, default_state, row_cells};
pub use view::OrdersScreen;
