//! Medicine Card Component
//!
//! One catalog entry in the store grid.

use ecomed_catalog::pricing::{format_amount, format_raw};
use ecomed_catalog::Item;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Card with image, discount badge, price and the cart toggle
#[component]
pub fn MedicineCard(
    item: Item,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    let store = use_app_store();
    let symbol = store.config().read_untracked().currency_symbol.clone();

    let id = item.id;
    let selected = item.selected;
    let price = format_amount(&symbol, item.display_price());
    let original_price = item.has_discount().then(|| format_raw(&symbol, item.price));
    let badge = item.has_discount().then(|| format!("{}% OFF", item.discount));

    view! {
        <div class="medicine-card">
            <div class="medicine-image">
                <img src=item.image.clone() alt=item.name.clone() />
                {badge.map(|text| view! { <span class="discount-badge">{text}</span> })}
            </div>

            <div class="medicine-body">
                <h3 class="medicine-name">{item.name.clone()}</h3>
                <div class="medicine-price">
                    <span class="price-current">{price}</span>
                    {original_price.map(|text| view! { <span class="price-original">{text}</span> })}
                </div>

                <button
                    class=if selected { "cart-btn added" } else { "cart-btn" }
                    on:click=move |_| on_toggle.run(id)
                >
                    {if selected { "Added" } else { "Add to Cart" }}
                </button>
            </div>
        </div>
    }
}
