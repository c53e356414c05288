//! Meal Browser Component
//!
//! Customer-side catalog: pick an area, load its meals, choose quantities.
//! The loaded catalog lives in the store so the order form can read it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::AreaSelect;
use crate::store::{use_app_store, AppStateStoreFields};
use mealdrop_client::{ApiError, MealDropApi};

#[component]
pub fn MealBrowser() -> impl IntoView {
    let api = use_context::<MealDropApi>().expect("MealDropApi should be provided");
    let store = use_app_store();

    let (status, set_status) = signal(String::new());

    let load_meals = move |_: web_sys::MouseEvent| {
        let area = store.selected_area().get();
        if area.is_empty() {
            set_status.set("Please choose a delivery area first.".to_string());
            return;
        }
        // drop the previous area's meals before fetching
        store.catalog().write().clear();
        set_status.set("Loading meals...".to_string());

        let api = api.clone();
        spawn_local(async move {
            match api.meals_by_area(&area).await {
                Ok(entries) if entries.is_empty() => {
                    set_status.set("No meals found for this area yet.".to_string());
                }
                Ok(entries) => {
                    log::info!("loaded {} meals for {area}", entries.len());
                    store.catalog().write().replace(entries);
                    set_status.set(String::new());
                }
                Err(err @ ApiError::Http { .. }) => {
                    set_status.set(err.to_string());
                }
                Err(err) => {
                    log::error!("meal load failed: {err}");
                    set_status.set("Network error when loading meals.".to_string());
                }
            }
        });
    };

    view! {
        <div class="meal-browser">
            <div class="browse-controls">
                <AreaSelect
                    value=Signal::derive(move || store.selected_area().get())
                    on_change=move |zone| store.selected_area().set(zone)
                />
                <button type="button" on:click=load_meals>"Show meals"</button>
            </div>

            <p class="browse-status">{move || status.get()}</p>

            <Show when=move || !store.catalog().read().is_empty()>
                <table class="meal-table">
                    <thead>
                        <tr>
                            <th>"Restaurant"</th>
                            <th>"Dish"</th>
                            <th>"Description"</th>
                            <th>"Prep (min)"</th>
                            <th>"Price"</th>
                            <th>"Qty"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.catalog().read().entries().to_vec()
                            key=|entry| entry.meal_id.clone()
                            children=move |entry| {
                                let meal_id = entry.meal_id.clone();
                                let qty_id = meal_id.clone();
                                view! {
                                    <tr>
                                        <td>{entry.restaurant_name.clone()}</td>
                                        <td>{entry.dish_name.clone()}</td>
                                        <td>{entry.description.clone()}</td>
                                        <td>{entry.prep_time_minutes}</td>
                                        <td>{format!("{:.2}", entry.price)}</td>
                                        <td>
                                            <input
                                                type="number"
                                                min="0"
                                                class="qty-input"
                                                prop:value=move || {
                                                    store.catalog().read().quantity_raw(&qty_id).to_string()
                                                }
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                    store.catalog().write().set_quantity(&meal_id, input.value());
                                                }
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
