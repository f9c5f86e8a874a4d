//! CLI command implementations. Each subcommand runs one full-screen TUI.

use std::sync::{Arc, Mutex};

use iocraft::prelude::*;
use tracing::debug;

use crate::error::{Result, StorekeepError};
use crate::tui::Screen;
use crate::tui::analytics::AnalyticsScreen;
use crate::tui::home::HomeScreen;
use crate::tui::inventory::InventoryScreen;
use crate::tui::orders::OrdersScreen;
use crate::tui::products::ProductsScreen;

async fn run_screen(screen: Screen) -> Result<()> {
    debug!(?screen, "entering screen");
    let rendered = match screen {
        Screen::Orders => element!(OrdersScreen).fullscreen().await,
        Screen::Inventory => element!(InventoryScreen).fullscreen().await,
        Screen::Products => element!(ProductsScreen).fullscreen().await,
        Screen::Analytics => element!(AnalyticsScreen).fullscreen().await,
    };
    rendered.map_err(|e| StorekeepError::Other(format!("TUI error: {}", e)))
}

fn tui_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| StorekeepError::Other(format!("Failed to create runtime: {}", e)))
}

/// Orders list with saved views, filters, search, and order creation
///
/// NOTE: This function creates its own tokio runtime because it's an entry point
/// for the TUI. This is intentional and safe since it's not called from within
/// another async context.
pub fn cmd_orders() -> Result<()> {
    tui_runtime()?.block_on(run_screen(Screen::Orders))
}

/// Inventory list with saved views, filters, and search
pub fn cmd_inventory() -> Result<()> {
    tui_runtime()?.block_on(run_screen(Screen::Inventory))
}

/// Product browser with title and description editing
pub fn cmd_products() -> Result<()> {
    tui_runtime()?.block_on(run_screen(Screen::Products))
}

/// Revenue chart over a selectable date range
pub fn cmd_analytics() -> Result<()> {
    tui_runtime()?.block_on(run_screen(Screen::Analytics))
}

/// Landing menu. Loops between the menu and the chosen screen until the
/// user quits from the menu itself.
pub fn cmd_home() -> Result<()> {
    let rt = tui_runtime()?;
    rt.block_on(async {
        loop {
            let outcome: Arc<Mutex<Option<Screen>>> = Arc::new(Mutex::new(None));
            element!(HomeScreen(outcome: Some(outcome.clone())))
                .fullscreen()
                .await
                .map_err(|e| StorekeepError::Other(format!("TUI error: {}", e)))?;

            let chosen = outcome.lock().ok().and_then(|mut guard| guard.take());
            match chosen {
                Some(screen) => run_screen(screen).await?,
                None => return Ok(()),
            }
        }
    })
}
