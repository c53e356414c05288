//! UI Components
//!
//! Reusable Leptos components.

mod area_select;
mod meal_browser;
mod order_form;
mod register_meal_form;

pub use area_select::AreaSelect;
pub use meal_browser::MealBrowser;
pub use order_form::OrderForm;
pub use register_meal_form::RegisterMealForm;
