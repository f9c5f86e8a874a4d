pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod listview;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use error::{Result, StorekeepError};
pub use gateway::{
    AdminGateway, Gateway, InventoryItem, Order, OrderInput, OrderLineInput, Product,
    ProductChanges,
};
pub use listview::{
    AppliedFilter, FilterChoice, FilterDefinition, ListRow, ListViewController, SavedView,
    SortDirection, SortOption, SortSelection,
};
