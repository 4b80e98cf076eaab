//! Client (customer) endpoints.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::ApiError;
use super::http::{ApiClient, Descriptor};
use super::models::{Client, NewClient};

/// Server-side list filters. Empty fields are not forwarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientFilter {
    pub name: Option<String>,
    pub cif: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
}

impl ClientFilter {
    fn apply(&self, mut descriptor: Descriptor) -> Descriptor {
        for (key, value) in [
            ("name", &self.name),
            ("cif", &self.cif),
            ("city", &self.city),
            ("province", &self.province),
        ] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                descriptor = descriptor.query(key, value);
            }
        }
        descriptor
    }
}

/// `GET /client` — list clients, optionally filtered.
pub async fn list(api: &ApiClient, token: Option<&str>, filter: &ClientFilter) -> Result<Vec<Client>, ApiError> {
    api.call_json(token, filter.apply(Descriptor::get("/client"))).await
}

/// `GET /client/{id}`.
pub async fn get(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Client, ApiError> {
    api.call_json(token, Descriptor::get(format!("/client/{id}"))).await
}

/// `POST /client`.
pub async fn create(api: &ApiClient, token: Option<&str>, client: &NewClient) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::post("/client", json!(client))).await
}

/// `PUT /client/{id}`.
pub async fn update(api: &ApiClient, token: Option<&str>, id: &str, client: &NewClient) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::put(format!("/client/{id}"), json!(client)))
        .await
}

/// `DELETE /client/{id}`.
pub async fn remove(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::delete(format!("/client/{id}"))).await
}

#[cfg(test)]
#[path = "clients_test.rs"]
mod tests;
