//! Order Form Component
//!
//! Customer details plus submission of the quantities picked in the browser.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields};
use mealdrop_client::{order_confirmation, ApiError, MealDropApi, OrderRequest};

#[component]
pub fn OrderForm() -> impl IntoView {
    let api = use_context::<MealDropApi>().expect("MealDropApi should be provided");
    let store = use_app_store();

    let (customer_name, set_customer_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (status, set_status) = signal(String::new());

    let place_order = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let area = store.selected_area().get();
        if area.is_empty() {
            set_status.set("Please choose a delivery area first.".to_string());
            return;
        }
        let items = store.catalog().read().line_items();
        if items.is_empty() {
            set_status.set("Please select at least one meal.".to_string());
            return;
        }
        let order = OrderRequest {
            area,
            customer_name: customer_name.get(),
            address: address.get(),
            items,
        };
        set_status.set("Submitting order...".to_string());

        let api = api.clone();
        spawn_local(async move {
            match api.submit_order(&order).await {
                Ok(receipt) => {
                    set_status.set(order_confirmation(receipt.as_ref()));
                }
                Err(err @ ApiError::Http { .. }) => {
                    set_status.set(err.to_string());
                }
                Err(err) => {
                    log::error!("order submission failed: {err}");
                    set_status.set("Network error when placing order.".to_string());
                }
            }
        });
    };

    view! {
        <form class="order-form" on:submit=place_order>
            <label>
                "Your name"
                <input
                    type="text"
                    prop:value=move || customer_name.get()
                    on:input=move |ev| set_customer_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Delivery address"
                <input
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
            </label>

            <button type="submit">"Place order"</button>
            <p class="form-message">{move || status.get()}</p>
        </form>
    }
}
