//! Backend Calls
//!
//! The three HTTP functions exposed by the delivery backend. Requests are
//! built separately from sending so the wire shape stays testable offline.

use reqwest::Client;

use crate::error::ApiError;
use crate::model::{CatalogEntry, MealDraft, OrderReceipt, OrderRequest, RegisterMealAck};

const REGISTER_MEAL_PATH: &str = "HTTPRegisterMeal";
const MEALS_BY_AREA_PATH: &str = "HTTPGetMealsByArea";
const SUBMIT_ORDER_PATH: &str = "HTTPSubmitOrder";

#[derive(Clone, Debug)]
pub struct MealDropApi {
    base: String,
    http: Client,
}

impl MealDropApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    fn register_request(&self, draft: &MealDraft) -> reqwest::RequestBuilder {
        self.http.post(self.url(REGISTER_MEAL_PATH)).json(draft)
    }

    fn meals_request(&self, area: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(MEALS_BY_AREA_PATH))
            .query(&[("area", area)])
    }

    fn order_request(&self, order: &OrderRequest) -> reqwest::RequestBuilder {
        self.http.post(self.url(SUBMIT_ORDER_PATH)).json(order)
    }

    /// Registers a meal. `Ok(None)` means the backend accepted it but the
    /// response body was not a decodable ack.
    pub async fn register_meal(
        &self,
        draft: &MealDraft,
    ) -> Result<Option<RegisterMealAck>, ApiError> {
        let response = self.register_request(draft).send().await?;
        if !response.status().is_success() {
            return Err(http_error(response).await);
        }
        Ok(response.json().await.ok())
    }

    /// Fetches the catalog for an area. A success body that does not decode
    /// as a meal list counts as an empty catalog.
    pub async fn meals_by_area(&self, area: &str) -> Result<Vec<CatalogEntry>, ApiError> {
        let response = self.meals_request(area).send().await?;
        if !response.status().is_success() {
            return Err(http_error(response).await);
        }
        Ok(response.json().await.unwrap_or_default())
    }

    /// Submits an order. `Ok(None)` means accepted without a decodable
    /// receipt.
    pub async fn submit_order(
        &self,
        order: &OrderRequest,
    ) -> Result<Option<OrderReceipt>, ApiError> {
        let response = self.order_request(order).send().await?;
        if !response.status().is_success() {
            return Err(http_error(response).await);
        }
        Ok(response.json().await.ok())
    }
}

async fn http_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => ApiError::Http { status, body },
        Err(err) => ApiError::Network(err),
    }
}
