//! Line-item state for the creation forms.
//!
//! The tracking pages edit line items through the list controller; the
//! create pages own a free-standing item list instead. This wraps the
//! same editor component around local signals, with the same
//! product-name autocomplete.

use contracts::domain::line_item::LineItem;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::line_item_editor::LineItemEditor;
use crate::shared::api::Api;
use crate::shared::list_controller::draft::{filter_matches, Suggestions};

const MAX_SUGGESTIONS: usize = 5;

#[derive(Clone, Copy)]
pub struct LineItemsForm {
    pub items: RwSignal<Vec<LineItem>>,
    suggestions: RwSignal<Suggestions>,
    product_names: RwSignal<Vec<String>>,
}

impl LineItemsForm {
    /// Starts with one blank row and loads the product names for the
    /// autocomplete in the background.
    pub fn new(api: Api) -> Self {
        let form = Self {
            items: RwSignal::new(vec![LineItem::blank()]),
            suggestions: RwSignal::new(Suggestions::default()),
            product_names: RwSignal::new(Vec::new()),
        };
        let product_names = form.product_names;
        spawn_local(async move {
            if let Ok(products) = api.get_json::<Vec<Product>>("/products").await {
                product_names.set(products.into_iter().map(|p| p.name).collect());
            }
        });
        form
    }

    /// Items ready to submit: normalized, blank rows dropped.
    pub fn collect(&self) -> Vec<LineItem> {
        self.items
            .get_untracked()
            .iter()
            .filter(|item| !item.name.trim().is_empty())
            .map(LineItem::normalized)
            .collect()
    }

    pub fn reset(&self) {
        self.items.set(vec![LineItem::blank()]);
        self.suggestions.update(|s| s.clear_all());
    }

    fn update_item(&self, row: usize, update: impl FnOnce(&mut LineItem)) {
        self.items.update(|items| {
            if let Some(item) = items.get_mut(row) {
                update(item);
            }
        });
    }

    pub fn editor(self) -> impl IntoView {
        view! {
            <LineItemEditor
                items=Signal::derive(move || self.items.get())
                suggestions=Signal::derive(move || self.suggestions.get())
                on_name=Callback::new(move |(row, value): (usize, String)| {
                    let matches = self
                        .product_names
                        .with_untracked(|names| filter_matches(names, &value, MAX_SUGGESTIONS));
                    self.suggestions.update(|s| s.set(row, matches));
                    self.update_item(row, move |item| item.name = value);
                })
                on_quantity=Callback::new(move |(row, quantity)| {
                    self.update_item(row, move |item| item.quantity = quantity);
                })
                on_unit=Callback::new(move |(row, unit): (usize, String)| {
                    self.update_item(row, move |item| item.unit = unit);
                })
                on_remove=Callback::new(move |row| {
                    self.items.update(|items| {
                        if row < items.len() {
                            items.remove(row);
                        }
                    });
                    self.suggestions.update(|s| s.clear(row));
                })
                on_add=Callback::new(move |_| {
                    self.items.update(|items| items.push(LineItem::blank()));
                })
                on_pick=Callback::new(move |(row, name): (usize, String)| {
                    self.update_item(row, move |item| item.name = name);
                    self.suggestions.update(|s| s.clear(row));
                })
            />
        }
    }
}
