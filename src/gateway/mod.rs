//! Remote data gateway for the commerce platform's admin API.
//!
//! Every domain read and write goes through the [`Gateway`] trait: orders,
//! inventory items, and products come back as normalized records with the
//! platform's nested optionals already flattened. Calls are async and
//! fallible; a failure is surfaced to the caller as-is, with no retry and no
//! caching.

pub mod admin;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use admin::AdminGateway;

/// Fixed page size for all list reads.
pub const PAGE_SIZE: i32 = 10;

/// An order as displayed on the orders screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Display name, e.g. "#1001".
    pub name: String,
    /// Creation timestamp (ISO 8601, passed through from the API).
    pub created_at: String,
    /// First name of the attached customer, if any.
    pub customer_first_name: Option<String>,
    /// Title of the sales channel app, if known.
    pub channel_title: Option<String>,
    /// Presentment-money total, verbatim decimal string.
    pub total_amount: String,
    pub financial_status: String,
    pub fulfillment_status: String,
}

/// An inventory item as displayed on the inventory screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub sku: Option<String>,
    /// Title of the product the item's variant belongs to.
    pub product_title: Option<String>,
}

/// A product as displayed on the product editor screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Rich-text description, markup included.
    pub description_html: String,
}

/// Input for creating an order. Built from an explicit form, never from
/// placeholder data.
#[derive(Debug, Clone)]
pub struct OrderInput {
    pub customer_id: String,
    pub line_items: Vec<OrderLineInput>,
}

/// A single order line.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: String,
    pub quantity: i32,
    /// Decimal amount, passed through verbatim.
    pub price: String,
}

/// Changed fields for a product update.
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub title: String,
    pub description_html: String,
}

/// Common interface to the admin API.
///
/// The TUI depends only on this trait, so screens can be driven by a test
/// double without any network access.
pub trait Gateway: Send + Sync {
    /// Fetch one page of orders, optionally narrowed by a search query
    /// string. The query is passed through to the platform verbatim.
    fn fetch_orders(
        &self,
        query: Option<String>,
    ) -> impl std::future::Future<Output = Result<Vec<Order>>> + Send;

    /// Fetch one page of inventory items.
    fn fetch_inventory(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<InventoryItem>>> + Send;

    /// Fetch one page of products.
    fn fetch_products(&self) -> impl std::future::Future<Output = Result<Vec<Product>>> + Send;

    /// Create an order. Returns the created order's id.
    fn create_order(
        &self,
        input: OrderInput,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Update a product's title and description. Returns the updated product.
    fn update_product(
        &self,
        id: String,
        changes: ProductChanges,
    ) -> impl std::future::Future<Output = Result<Product>> + Send;
}
