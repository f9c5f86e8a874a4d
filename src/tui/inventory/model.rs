//! Inventory screen state: row adaptation, filters, and sorts.

use crate::gateway::InventoryItem;
use crate::listview::{
    FilterChoice, FilterDefinition, ListRow, ListViewController, SortDirection, SortOption,
    SortSelection,
};
use crate::tui::components::{TableColumn, TableRow};
use crate::tui::list_screen::ListScreenState;
use crate::utils::text::slugify;

/// Placeholder shown when an inventory item has no SKU.
pub const NO_SKU: &str = "No SKU";

impl ListRow for InventoryItem {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.sku.as_deref().unwrap_or(""),
            self.product_title.as_deref().unwrap_or(""),
        )
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            // Product category, approximated by the slugified product title
            "type" => self.product_title.as_deref().map(slugify),
            // Inventory items carry no status, so a "tone" filter can never
            // match; the chip still applies and is removable.
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> String {
        match field {
            "product" => self
                .product_title
                .as_deref()
                .unwrap_or("")
                .to_lowercase(),
            _ => self.sku.as_deref().unwrap_or(NO_SKU).to_lowercase(),
        }
    }
}

pub fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption {
            label: "SKU",
            field: "sku",
            direction: SortDirection::Ascending,
            direction_label: "A-Z",
        },
        SortOption {
            label: "SKU",
            field: "sku",
            direction: SortDirection::Descending,
            direction_label: "Z-A",
        },
        SortOption {
            label: "Product",
            field: "product",
            direction: SortDirection::Ascending,
            direction_label: "A-Z",
        },
        SortOption {
            label: "Product",
            field: "product",
            direction: SortDirection::Descending,
            direction_label: "Z-A",
        },
    ]
}

pub fn filter_definitions() -> Vec<FilterDefinition> {
    vec![
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
    ]
}

/// Fresh screen state with the default tabs and sort.
pub fn default_state() -> ListScreenState<InventoryItem> {
    let controller =
        ListViewController::new(&["All", "Unstocked"], SortSelection::ascending("sku"));
    ListScreenState::new(controller, sort_options(), filter_definitions())
}

pub fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("SKU", 20),
        TableColumn::new("Product", 30),
        TableColumn::new("Item id", 30),
    ]
}

pub fn row_cells(item: &InventoryItem, checked: bool) -> TableRow {
    TableRow {
        id: item.id.clone(),
        cells: vec![
            item.sku.clone().unwrap_or_else(|| NO_SKU.to_string()),
            item.product_title.clone().unwrap_or_default(),
            item.id.clone(),
        ],
        cell_colors: Vec::new(),
        checked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sku: Option<&str>, product: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            sku: sku.map(String::from),
            product_title: product.map(String::from),
        }
    }

    #[test]
    fn test_missing_sku_renders_placeholder() {
        let row = row_cells(&item("1", None, Some("Mug")), false);
        assert_eq!(row.cells[0], NO_SKU);
    }

    #[test]
    fn test_type_filter_matches_slugified_product_title() {
        let mut state = default_state();
        state.rows_loaded(vec![
            item("1", Some("BG-1"), Some("Brew Gear")),
            item("2", Some("BM-1"), Some("Brew Merch")),
            item("3", None, None),
        ]);
        state
            .controller
            .set_filter("type", vec!["brew-gear".to_string()]);

        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_tone_filter_never_matches_items() {
        let mut state = default_state();
        state.rows_loaded(vec![item("1", Some("BG-1"), Some("Brew Gear"))]);
        state
            .controller
            .set_filter("tone", vec!["active".to_string()]);

        assert!(state.visible().is_empty());
        assert_eq!(state.controller.applied_filters()[0].label, "tone: active");
    }
}
