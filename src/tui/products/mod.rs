//! Products screen: browse products and edit title/description.

mod model;
mod view;

pub use model::{EditField, EditForm, ProductsState};
pub use view::ProductsScreen;
