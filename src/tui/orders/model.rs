//! Orders screen state: row adaptation, filters, sorts, and the creation form.

use crate::display::{format_order_date, sortable_amount, sortable_order_name};
use crate::gateway::{Order, OrderInput, OrderLineInput};
use crate::listview::{
    FilterChoice, FilterDefinition, ListRow, ListViewController, SortDirection, SortOption,
    SortSelection,
};
use crate::tui::components::{TableColumn, TableRow};
use crate::tui::list_screen::ListScreenState;
use crate::tui::theme::theme;

/// Placeholder shown when an order has no attached customer.
pub const NO_CUSTOMER: &str = "No customer";
/// Placeholder shown when the sales channel is unknown.
pub const NO_CHANNEL: &str = "No channel";

impl ListRow for Order {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.customer_first_name.as_deref().unwrap_or(""),
            self.channel_title.as_deref().unwrap_or(""),
        )
    }

    fn filter_value(&self, _key: &str) -> Option<String> {
        // The order payload carries neither a product status nor a product
        // category, so no filter group can match a row. A chosen chip still
        // applies, empties the list, and stays removable like any other.
        None
    }

    fn sort_key(&self, field: &str) -> String {
        match field {
            "date" => self.created_at.clone(),
            "customer" => self
                .customer_first_name
                .as_deref()
                .unwrap_or(NO_CUSTOMER)
                .to_lowercase(),
            "total" => sortable_amount(&self.total_amount),
            _ => sortable_order_name(&self.name),
        }
    }
}

pub fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption {
            label: "Order",
            field: "order",
            direction: SortDirection::Ascending,
            direction_label: "Ascending",
        },
        SortOption {
            label: "Order",
            field: "order",
            direction: SortDirection::Descending,
            direction_label: "Descending",
        },
        SortOption {
            label: "Date",
            field: "date",
            direction: SortDirection::Ascending,
            direction_label: "Oldest first",
        },
        SortOption {
            label: "Date",
            field: "date",
            direction: SortDirection::Descending,
            direction_label: "Newest first",
        },
        SortOption {
            label: "Customer",
            field: "customer",
            direction: SortDirection::Ascending,
            direction_label: "A-Z",
        },
        SortOption {
            label: "Customer",
            field: "customer",
            direction: SortDirection::Descending,
            direction_label: "Z-A",
        },
        SortOption {
            label: "Total",
            field: "total",
            direction: SortDirection::Ascending,
            direction_label: "Low to high",
        },
        SortOption {
            label: "Total",
            field: "total",
            direction: SortDirection::Descending,
            direction_label: "High to low",
        },
    ]
}

pub fn filter_definitions() -> Vec<FilterDefinition> {
    vec![
        FilterDefinition {
            key: "tone",
            label: "Status",
            choices: vec![
                FilterChoice {
                    label: "Active",
                    value: "active",
                },
                FilterChoice {
                    label: "Draft",
                    value: "draft",
                },
                FilterChoice {
                    label: "Archived",
                    value: "archived",
                },
            ],
        },
        FilterDefinition {
            key: "type",
            label: "Type",
            choices: vec![
                FilterChoice {
                    label: "Brew Gear",
                    value: "brew-gear",
                },
                FilterChoice {
                    label: "Brew Merch",
                    value: "brew-merch",
                },
            ],
        },
    ]
}

/// Fresh screen state with the default tabs and sort.
pub fn default_state() -> ListScreenState<Order> {
    let controller = ListViewController::new(
        &["All", "Unfulfilled", "Unpaid"],
        SortSelection::ascending("order"),
    );
    ListScreenState::new(controller, sort_options(), filter_definitions())
}

pub fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Order", 9),
        TableColumn::new("Date", 22),
        TableColumn::new("Customer", 14),
        TableColumn::new("Channel", 14),
        TableColumn::new("Total", 12),
        TableColumn::new("Payment", 12),
        TableColumn::new("Fulfillment", 12),
    ]
}

pub fn row_cells(order: &Order, checked: bool) -> TableRow {
    let theme = theme();
    TableRow {
        id: order.id.clone(),
        cells: vec![
            order.name.clone(),
            format_order_date(&order.created_at),
            order
                .customer_first_name
                .clone()
                .unwrap_or_else(|| NO_CUSTOMER.to_string()),
            order
                .channel_title
                .clone()
                .unwrap_or_else(|| NO_CHANNEL.to_string()),
            format!("${}", order.total_amount),
            order.financial_status.clone(),
            order.fulfillment_status.clone(),
        ],
        // Only the two status columns carry a color
        cell_colors: vec![
            None,
            None,
            None,
            None,
            None,
            Some(theme.financial_color(&order.financial_status)),
            Some(theme.fulfillment_color(&order.fulfillment_status)),
        ],
        checked,
    }
}

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderField {
    #[default]
    CustomerId,
    ProductId,
    Quantity,
    Price,
}

impl OrderField {
    pub fn next(self) -> Self {
        match self {
            Self::CustomerId => Self::ProductId,
            Self::ProductId => Self::Quantity,
            Self::Quantity => Self::Price,
            Self::Price => Self::CustomerId,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::CustomerId => Self::Price,
            Self::ProductId => Self::CustomerId,
            Self::Quantity => Self::ProductId,
            Self::Price => Self::Quantity,
        }
    }
}

/// The order creation form. Stays open until the mutation is confirmed;
/// a rejected submit keeps the entered values and shows the error inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrderForm {
    pub customer_id: String,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
    pub focused: OrderField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CreateOrderForm {
    /// Validate the form into a gateway input, or explain what is wrong.
    pub fn validate(&self) -> Result<OrderInput, String> {
        if self.customer_id.trim().is_empty() {
            return Err("Customer id is required".to_string());
        }
        if self.product_id.trim().is_empty() {
            return Err("Product id is required".to_string());
        }
        let quantity: i32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        if quantity <= 0 {
            return Err("Quantity must be positive".to_string());
        }
        let price = self.price.trim();
        if price.is_empty() || price.parse::<f64>().is_err() {
            return Err("Price must be a decimal amount".to_string());
        }
        Ok(OrderInput {
            customer_id: self.customer_id.trim().to_string(),
            line_items: vec![OrderLineInput {
                product_id: self.product_id.trim().to_string(),
                quantity,
                price: price.to_string(),
            }],
        })
    }
}
