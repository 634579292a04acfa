//! EcoMed Store App
//!
//! Pharmacy store screen: medicine grid, cart counter and add-item modal.

use ecomed_catalog::StoreConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddMedicineForm, CartCounter, MedicineCard};
use crate::store::{store_toggle_item, AppState, AppStateStoreFields};

#[component]
pub fn App(config: StoreConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config));

    // Provide the store to all children
    provide_context(store);

    let on_toggle = Callback::new(move |id: u32| store_toggle_item(&store, id));

    view! {
        <div class="store-page">
            <h1 class="store-title">"Pharmacy Store"</h1>

            <div class="medicine-grid">
                <For
                    each=move || store.catalog().read().items().to_vec()
                    key=|item| (item.id, item.selected)
                    children=move |item| view! { <MedicineCard item=item on_toggle=on_toggle /> }
                />
            </div>

            <AddMedicineForm />

            <button class="add-fab" on:click=move |_| store.form().write().open()>"+"</button>

            <CartCounter />
        </div>
    }
}
