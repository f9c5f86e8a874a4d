//! Products screen state and the title/description edit form.

use crate::gateway::{Product, ProductChanges};
use crate::tui::components::Toast;
use crate::tui::navigation;
use crate::utils::text::strip_tags;

/// Which edit field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Description,
}

impl EditField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

/// The product edit form. The description is seeded with markup stripped,
/// and submitting sends plain text back. The form closes only when the
/// platform confirms the update; a rejection keeps it open with the error
/// shown inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub product_id: String,
    pub title: String,
    pub description: String,
    pub focused: EditField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl EditForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            description: strip_tags(&product.description_html),
            focused: EditField::Title,
            error: None,
            submitting: false,
        }
    }

    pub fn changes(&self) -> ProductChanges {
        ProductChanges {
            title: self.title.clone(),
            description_html: self.description.clone(),
        }
    }
}

/// State for the products screen.
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub edit: Option<EditForm>,
    pub toast: Option<Toast>,
    pub should_exit: bool,
}

impl ProductsState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn rows_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.is_loading = false;
        self.load_error = None;
        navigation::clamp_selection(
            &mut self.selected_index,
            &mut self.scroll_offset,
            self.products.len(),
        );
    }

    pub fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.load_error = Some(message.clone());
        self.toast = Some(Toast::error(message));
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected_index)
    }

    /// Open the edit form for the product under the cursor.
    pub fn open_editor(&mut self) {
        if let Some(product) = self.selected_product() {
            self.edit = Some(EditForm::from_product(product));
        }
    }

    /// The update was confirmed: close the form, swap in the returned
    /// product, and report success.
    pub fn update_succeeded(&mut self, updated: Product) {
        self.edit = None;
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *existing = updated;
        }
        self.toast = Some(Toast::success("Product updated"));
    }

    /// The update was rejected: keep the form open, keep the entered values,
    /// and show the error inline.
    pub fn update_failed(&mut self, message: String) {
        if let Some(form) = self.edit.as_mut() {
            form.error = Some(message);
            form.submitting = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str, html: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description_html: html.to_string(),
        }
    }

    #[test]
    fn test_editor_seeds_stripped_description() {
        let form = EditForm::from_product(&product(
            "1",
            "Mug",
            "<p>Hello <b>World</b></p>",
        ));
        assert_eq!(form.description, "Hello World");
        assert_eq!(form.title, "Mug");
    }

    #[test]
    fn test_update_success_closes_form_and_swaps_product() {
        let mut state = ProductsState::new();
        state.rows_loaded(vec![product("1", "Mug", "<p>old</p>")]);
        state.open_editor();
        assert!(state.edit.is_some());

        state.update_succeeded(product("1", "Big Mug", "new"));
        assert!(state.edit.is_none());
        assert_eq!(state.products[0].title, "Big Mug");
    }

    #[test]
    fn test_update_failure_keeps_form_open_with_inline_error() {
        let mut state = ProductsState::new();
        state.rows_loaded(vec![product("1", "Mug", "<p>old</p>")]);
        state.open_editor();
        if let Some(form) = state.edit.as_mut() {
            form.title = "Renamed".to_string();
            form.submitting = true;
        }

        state.update_failed("rejected by the platform: title: too long".to_string());

        let form = state.edit.as_ref().unwrap();
        assert_eq!(form.title, "Renamed");
        assert!(!form.submitting);
        assert!(form.error.as_deref().unwrap().contains("too long"));
        // No success toast was raised
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_load_failure_keeps_products() {
        let mut state = ProductsState::new();
        state.rows_loaded(vec![product("1", "Mug", "")]);
        state.load_failed("boom".to_string());
        assert_eq!(state.products.len(), 1);
        assert!(state.load_error.is_some());
    }
}
