//! Cart Counter Component
//!
//! Floating badge with the number of selected items and their total.

use ecomed_catalog::pricing::format_amount;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartCounter() -> impl IntoView {
    let store = use_app_store();
    let summary = move || store.catalog().read().cart_summary();
    let symbol = move || store.config().read().currency_symbol.clone();

    view! {
        <div class="cart-counter">
            <span class="cart-count">{move || format!("Cart: {}", summary().count)}</span>
            <Show when=move || { summary().has_items() }>
                <span class="cart-total">{move || format_amount(&symbol(), summary().total)}</span>
            </Show>
            <Show when=move || { summary().has_savings() }>
                <span class="cart-savings">
                    {move || format!("You save {}", format_amount(&symbol(), summary().savings))}
                </span>
            </Show>
        </div>
    }
}
