//! MealDrop Frontend App
//!
//! Main application component with the restaurant and customer panels.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{MealBrowser, OrderForm, RegisterMealForm};
use crate::store::AppState;
use mealdrop_client::MealDropApi;

// TODO: when the Function App is deployed, replace this with its real URL,
// e.g. "https://myfunctionapp.azurewebsites.net/api".
const API_BASE: &str = "https://YOUR-FUNCTION-APP-NAME.azurewebsites.net/api";

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(MealDropApi::new(API_BASE));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"MealDrop"</h1>
                <p class="tagline">"Home-cooked meals, delivered by area."</p>
            </header>

            <main class="panels">
                // Left: restaurant side
                <section class="panel">
                    <h2>"Register a meal"</h2>
                    <RegisterMealForm />
                </section>

                // Right: customer side
                <section class="panel">
                    <h2>"Browse and order"</h2>
                    <MealBrowser />
                    <OrderForm />
                </section>
            </main>
        </div>
    }
}
