//! EcoMed Catalog
//!
//! Catalog and cart state for the pharmacy store screen.
//! This crate has NO rendering dependencies: the UI holds a [`Catalog`]
//! and an [`AddItemForm`] and calls into them on user events.
//!
//! - error: crate error type
//! - item / pricing: catalog entries and derived prices
//! - draft: unvalidated form input and field-keyed validation
//! - catalog: the ordered item collection and selection state
//! - form: the add-item modal state
//! - config: store settings loaded from JSON

mod catalog;
mod config;
mod draft;
mod error;
mod form;
mod item;
pub mod pricing;

#[cfg(test)]
mod tests;

pub use catalog::{CartSummary, Catalog};
pub use config::StoreConfig;
pub use draft::{Draft, DraftField, ValidDraft, ValidationErrors};
pub use error::{CatalogError, CatalogResult};
pub use form::AddItemForm;
pub use item::Item;
