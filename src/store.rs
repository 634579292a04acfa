//! Store Screen State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All behavior
//! lives in `ecomed_catalog`; these helpers only route UI events to it.

use ecomed_catalog::{AddItemForm, Catalog, StoreConfig};
use leptos::prelude::*;
use reactive_stores::Store;

/// State for the pharmacy store screen
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Medicines and their selection flags
    pub catalog: Catalog,
    /// The "Add New Medicine" modal
    pub form: AddItemForm,
    pub config: StoreConfig,
}

impl AppState {
    /// Fresh screen state with seeded demo items
    pub fn new(config: StoreConfig) -> Self {
        Self {
            catalog: Catalog::seeded(&config, &mut rand::thread_rng()),
            form: AddItemForm::default(),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the "Add to Cart" state of an item
pub fn store_toggle_item(store: &AppStore, item_id: u32) {
    store.catalog().write().toggle_selected(item_id);
}

/// Submit the add-item form against the catalog
pub fn store_submit_form(store: &AppStore) -> Option<u32> {
    let mut state = store.write();
    let AppState { catalog, form, .. } = &mut *state;
    form.submit(catalog)
}
