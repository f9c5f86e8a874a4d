#![allow(dead_code)]

use storekeep::{InventoryItem, Order};

/// An order with sensible defaults for tests.
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            order: Order {
                id: id.to_string(),
                name: name.to_string(),
                created_at: "2026-08-27T13:15:00Z".to_string(),
                customer_first_name: Some("Ada".to_string()),
                channel_title: Some("Online Store".to_string()),
                total_amount: "10.00".to_string(),
                financial_status: "PAID".to_string(),
                fulfillment_status: "UNFULFILLED".to_string(),
            },
        }
    }

    pub fn customer(mut self, name: Option<&str>) -> Self {
        self.order.customer_first_name = name.map(String::from);
        self
    }

    pub fn channel(mut self, title: Option<&str>) -> Self {
        self.order.channel_title = title.map(String::from);
        self
    }

    pub fn total(mut self, amount: &str) -> Self {
        self.order.total_amount = amount.to_string();
        self
    }

    pub fn financial(mut self, status: &str) -> Self {
        self.order.financial_status = status.to_string();
        self
    }

    pub fn created_at(mut self, timestamp: &str) -> Self {
        self.order.created_at = timestamp.to_string();
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

pub fn mock_order(id: &str, name: &str) -> Order {
    OrderBuilder::new(id, name).build()
}

pub fn mock_inventory_item(id: &str, sku: Option<&str>, product: &str) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        sku: sku.map(String::from),
        product_title: Some(product.to_string()),
    }
}
