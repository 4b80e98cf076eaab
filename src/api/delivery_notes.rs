//! Delivery-note endpoints, including the PDF export.

use serde_json::{Value, json};

use super::error::ApiError;
use super::http::{ApiClient, Descriptor};
use super::models::{DeliveryNote, NewDeliveryNote};

/// `GET /deliverynote` — list all delivery notes.
pub async fn list(api: &ApiClient, token: Option<&str>) -> Result<Vec<DeliveryNote>, ApiError> {
    api.call_json(token, Descriptor::get("/deliverynote")).await
}

/// `GET /deliverynote/{id}`.
pub async fn get(api: &ApiClient, token: Option<&str>, id: &str) -> Result<DeliveryNote, ApiError> {
    api.call_json(token, Descriptor::get(format!("/deliverynote/{id}"))).await
}

/// `POST /deliverynote`.
pub async fn create(api: &ApiClient, token: Option<&str>, note: &NewDeliveryNote) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::post("/deliverynote", json!(note))).await
}

/// `DELETE /deliverynote/{id}`.
pub async fn remove(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::delete(format!("/deliverynote/{id}"))).await
}

/// `GET /deliverynote/pdf/{id}` — binary PDF export.
pub async fn pdf(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Vec<u8>, ApiError> {
    api.call_bytes(token, Descriptor::get(format!("/deliverynote/pdf/{id}"))).await
}

#[cfg(test)]
#[path = "delivery_notes_test.rs"]
mod tests;
