//! Add Medicine Form Component
//!
//! Modal form for adding a medicine to the catalog, with inline
//! per-field validation messages.

use ecomed_catalog::{Draft, DraftField};
use leptos::prelude::*;

use crate::store::{store_submit_form, use_app_store, AppStateStoreFields};

/// Modal overlay shown while the add-item form is open
#[component]
pub fn AddMedicineForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store);
    };

    // Clicks on the backdrop itself (not the dialog) close an untouched form
    let overlay_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            store.form().write().dismiss();
        }
    };

    view! {
        <Show when=move || store.form().read().open>
            <div class="modal-overlay" on:click=overlay_click>
                <div class="modal">
                    <h2>"Add New Medicine"</h2>
                    <form class="add-medicine-form" on:submit=submit>
                        <DraftInput
                            label="Medicine Name *"
                            input_type="text"
                            field=DraftField::Name
                            value=|draft: &Draft| draft.name.clone()
                            set_value=|draft: &mut Draft, value: String| draft.name = value
                        />

                        <div class="form-row">
                            <DraftInput
                                label="Price *"
                                input_type="number"
                                field=DraftField::Price
                                value=|draft: &Draft| draft.price.clone()
                                set_value=|draft: &mut Draft, value: String| draft.price = value
                            />
                            <DraftInput
                                label="Discount (%)"
                                input_type="number"
                                field=DraftField::Discount
                                value=|draft: &Draft| draft.discount.clone()
                                set_value=|draft: &mut Draft, value: String| draft.discount = value
                            />
                        </div>

                        <DraftInput
                            label="Image URL"
                            input_type="url"
                            placeholder="https://example.com/image.jpg"
                            value=|draft: &Draft| draft.image.clone()
                            set_value=|draft: &mut Draft, value: String| draft.image = value
                        />

                        <div class="form-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| store.form().write().cancel()>
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn">"Add Medicine"</button>
                        </div>
                    </form>

                    <Show when=move || !store.form().read().draft.is_empty()>
                        <p class="dismiss-hint">"Click outside to cancel (only when form is empty)"</p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Labeled input bound to one draft field
#[component]
fn DraftInput(
    label: &'static str,
    input_type: &'static str,
    /// Field whose validation message is shown under the input
    #[prop(optional)]
    field: Option<DraftField>,
    #[prop(optional)] placeholder: &'static str,
    value: fn(&Draft) -> String,
    set_value: fn(&mut Draft, String),
) -> impl IntoView {
    let store = use_app_store();
    let error = move || {
        field.and_then(|field| store.form().read().error(field).map(str::to_string))
    };

    view! {
        <div class="form-field">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                class=move || if error().is_some() { "form-input invalid" } else { "form-input" }
                prop:value=move || value(&store.form().read().draft)
                on:input=move |ev| set_value(&mut store.form().write().draft, event_target_value(&ev))
            />
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}
