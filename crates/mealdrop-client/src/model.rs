//! Wire Models
//!
//! Data structures matching the backend contract, plus the user-facing
//! one-liners derived from the POST responses.

use serde::{Deserialize, Serialize};

/// Meal registration request body.
///
/// The numeric fields stay in their raw form-field text; the backend owns
/// coercion and validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDraft {
    pub restaurant_name: String,
    pub dish_name: String,
    pub description: String,
    pub prep_time_minutes: String,
    pub price: String,
    pub area: String,
}

/// One meal in the catalog response for an area.
///
/// The backend's serialization casing is not guaranteed, so every key is
/// accepted in both its uppercase-initial and lowercase-initial form, and a
/// missing key falls back to the field's empty value. The meal id travels as
/// `rowKey`/`RowKey` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogEntry {
    #[serde(rename = "rowKey", alias = "RowKey")]
    pub meal_id: String,
    #[serde(alias = "RestaurantName")]
    pub restaurant_name: String,
    #[serde(alias = "DishName")]
    pub dish_name: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "PrepTimeMinutes")]
    pub prep_time_minutes: u32,
    #[serde(alias = "Price")]
    pub price: f64,
}

/// One (meal, quantity) pair in an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub meal_id: String,
    pub name: String,
    pub price: f64,
    pub prep_time_minutes: u32,
    pub quantity: u32,
}

/// Order submission request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub area: String,
    pub customer_name: String,
    pub address: String,
    pub items: Vec<OrderItem>,
}

/// Registration response; the backend may omit the id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMealAck {
    pub meal_id: Option<String>,
}

/// Order response; either figure may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub total_price: Option<f64>,
    pub estimated_minutes: Option<f64>,
}

/// Confirmation line for a saved meal; `None` means the success body could
/// not be decoded.
pub fn saved_message(ack: Option<&RegisterMealAck>) -> String {
    let id = ack.and_then(|a| a.meal_id.as_deref()).unwrap_or("n/a");
    format!("Meal saved successfully! (ID: {id})")
}

/// Confirmation line for a placed order; missing figures show as "unknown".
pub fn order_confirmation(receipt: Option<&OrderReceipt>) -> String {
    format!(
        "Order placed! Total: {}. Estimated delivery time: {} minutes.",
        figure(receipt.and_then(|r| r.total_price)),
        figure(receipt.and_then(|r| r.estimated_minutes)),
    )
}

fn figure(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}
