//! Terminal UI: screens, shared components, and the list-view machinery.

pub mod analytics;
pub mod components;
pub mod home;
pub mod inventory;
pub mod list_screen;
pub mod navigation;
pub mod orders;
pub mod products;
pub mod theme;

/// The screens the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Orders,
    Inventory,
    Products,
    Analytics,
}
