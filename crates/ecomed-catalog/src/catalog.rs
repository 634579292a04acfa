//! Catalog / Cart Store
//!
//! Ordered collection of items plus their selection state. Ids come from a
//! dedicated counter, so they stay unique regardless of collection size.

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::{StoreConfig, PLACEHOLDER_IMAGE};
use crate::draft::{Draft, ValidationErrors};
use crate::item::Item;
use crate::pricing::round2;

/// Totals for the items currently flagged for purchase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub count: usize,
    /// Sum of base prices
    pub subtotal: f64,
    /// Sum of display prices
    pub total: f64,
    pub savings: f64,
}

impl CartSummary {
    pub fn has_items(&self) -> bool {
        self.count > 0
    }

    /// Any selected item carries a discount
    pub fn has_savings(&self) -> bool {
        self.savings > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Insertion order is display order
    items: Vec<Item>,
    next_id: u32,
    placeholder_image: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog using the default placeholder image
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Empty catalog using the configured placeholder image
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            ..Self::new()
        }
    }

    /// Catalog pre-filled with `config.seed_count` demo medicines.
    ///
    /// Prices are whole numbers in 10..=59; about half carry a 10% discount.
    pub fn seeded<R: Rng>(config: &StoreConfig, rng: &mut R) -> Self {
        let mut catalog = Self::with_config(config);
        for _ in 0..config.seed_count {
            let id = catalog.allocate_id();
            let price = f64::from(rng.gen_range(10..=59u32));
            let discount = if rng.gen_bool(0.5) { 10.0 } else { 0.0 };
            catalog.items.push(Item::new(
                id,
                format!("Medicine {}", id),
                price,
                discount,
                config.seed_image.clone(),
            ));
        }
        debug!("Seeded catalog with {} items", catalog.items.len());
        catalog
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validate the draft and append a new, unselected item.
    ///
    /// On validation failure the collection is left untouched.
    pub fn add_item(&mut self, draft: &Draft) -> Result<&Item, ValidationErrors> {
        let valid = draft.validate().inspect_err(|errors| debug!("Rejected draft: {}", errors))?;

        let id = self.allocate_id();
        let image = valid.image.unwrap_or_else(|| self.placeholder_image.clone());
        let index = self.items.len();
        self.items.push(Item::new(id, valid.name, valid.price, valid.discount, image));
        debug!("Added item #{}", id);
        Ok(&self.items[index])
    }

    /// Flip the selection flag of an item, returning the new value.
    ///
    /// Unknown ids are ignored.
    pub fn toggle_selected(&mut self, id: u32) -> Option<bool> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                let selected = item.toggle();
                debug!("Item #{} selected={}", id, selected);
                Some(selected)
            }
            None => {
                debug!("Ignoring toggle for unknown item #{}", id);
                None
            }
        }
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.selected)
    }

    /// Number of items flagged for purchase
    pub fn selected_count(&self) -> usize {
        self.selected_items().count()
    }

    pub fn cart_summary(&self) -> CartSummary {
        let (count, subtotal, total) = self
            .selected_items()
            .fold((0, 0.0, 0.0), |(count, subtotal, total), item| {
                (count + 1, subtotal + item.price, total + item.display_price())
            });
        CartSummary {
            count,
            subtotal: round2(subtotal),
            total: round2(total),
            savings: round2(subtotal - total),
        }
    }
}
