//! Register Meal Form Component
//!
//! Restaurant-side form. Sends the fields exactly as typed; the backend owns
//! validation of the numeric ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AreaSelect;
use mealdrop_client::{saved_message, ApiError, MealDraft, MealDropApi};

#[component]
pub fn RegisterMealForm() -> impl IntoView {
    let api = use_context::<MealDropApi>().expect("MealDropApi should be provided");

    let (restaurant_name, set_restaurant_name) = signal(String::new());
    let (dish_name, set_dish_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (prep_time, set_prep_time) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (area, set_area) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let save_meal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = MealDraft {
            restaurant_name: restaurant_name.get(),
            dish_name: dish_name.get(),
            description: description.get(),
            prep_time_minutes: prep_time.get(),
            price: price.get(),
            area: area.get(),
        };
        set_message.set("Saving meal...".to_string());

        let api = api.clone();
        spawn_local(async move {
            match api.register_meal(&draft).await {
                Ok(ack) => {
                    set_message.set(saved_message(ack.as_ref()));
                    // clear form
                    set_restaurant_name.set(String::new());
                    set_dish_name.set(String::new());
                    set_description.set(String::new());
                    set_prep_time.set(String::new());
                    set_price.set(String::new());
                    set_area.set(String::new());
                }
                Err(err @ ApiError::Http { .. }) => {
                    set_message.set(err.to_string());
                }
                Err(err) => {
                    log::error!("meal registration failed: {err}");
                    set_message.set("Network error when saving meal.".to_string());
                }
            }
        });
    };

    view! {
        <form class="meal-form" on:submit=save_meal>
            <label>
                "Restaurant name"
                <input
                    type="text"
                    prop:value=move || restaurant_name.get()
                    on:input=move |ev| set_restaurant_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Dish name"
                <input
                    type="text"
                    prop:value=move || dish_name.get()
                    on:input=move |ev| set_dish_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Prep time (minutes)"
                <input
                    type="number"
                    prop:value=move || prep_time.get()
                    on:input=move |ev| set_prep_time.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Price"
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Delivery area"
                <AreaSelect
                    value=area.into()
                    on_change=move |zone| set_area.set(zone)
                />
            </label>

            <button type="submit">"Save meal"</button>
            <p class="form-message">{move || message.get()}</p>
        </form>
    }
}
