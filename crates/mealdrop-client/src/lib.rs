//! MealDrop Delivery API Client
//!
//! Typed request/response contract for the serverless delivery backend,
//! plus the in-memory catalog the order flow composes line items from.
//! Target-agnostic: on wasm32 the HTTP layer rides the browser fetch API.

mod api;
mod catalog;
mod error;
mod model;

pub use api::MealDropApi;
pub use catalog::Catalog;
pub use error::ApiError;
pub use model::{
    order_confirmation, saved_message, CatalogEntry, MealDraft, OrderItem, OrderReceipt,
    OrderRequest, RegisterMealAck,
};
