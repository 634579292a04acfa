//! Catalog Item
//!
//! A purchasable medicine in the store catalog.

use serde::{Deserialize, Serialize};

use crate::pricing;

/// A catalog entry with identity, price, discount and selection state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    /// Base price before discount (never overwritten)
    pub price: f64,
    /// Discount percentage in [0, 100]
    pub discount: f64,
    /// Image URL
    pub image: String,
    /// Flagged for purchase ("Added" in the card)
    pub selected: bool,
}

impl Item {
    /// Create a new, unselected item
    pub fn new(id: u32, name: String, price: f64, discount: f64, image: String) -> Self {
        Self {
            id,
            name,
            price,
            discount,
            image,
            selected: false,
        }
    }

    /// Price shown to the user, rounded to 2 decimals
    pub fn display_price(&self) -> f64 {
        pricing::round2(pricing::discounted(self.price, self.discount))
    }

    /// Whether the card shows a discount badge and the struck-through base price
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }

    /// Flip the selection flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }
}
