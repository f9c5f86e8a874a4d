//! Reusable TUI components shared across screens.

pub mod bar_chart;
pub mod data_table;
pub mod empty_state;
pub mod filter_chips;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod search_box;
pub mod tab_bar;
pub mod toast;

pub use bar_chart::{BarChart, ChartBar};
pub use data_table::{DataTable, TableColumn, TableRow};
pub use empty_state::{EmptyState, EmptyStateKind};
pub use filter_chips::FilterChips;
pub use footer::{Footer, Shortcut};
pub use header::Header;
pub use modal_container::{ModalContainer, ModalHeight, ModalOverlay, ModalWidth};
pub use search_box::SearchBox;
pub use tab_bar::TabBar;
pub use toast::{Toast, ToastLevel, render_toast};
