//! Project endpoints.
//!
//! The remote contract is slightly uneven here: single-project reads live
//! under `/project/one/{id}` while mutations use `/project/{id}`.

use serde::Deserialize;
use serde_json::{Value, json};

use super::error::ApiError;
use super::http::{ApiClient, Descriptor};
use super::models::{NewProject, Project};

/// Server-side list filters. Empty fields are not forwarded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectFilter {
    fn apply(&self, mut descriptor: Descriptor) -> Descriptor {
        for (key, value) in [("name", &self.name), ("description", &self.description)] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                descriptor = descriptor.query(key, value);
            }
        }
        descriptor
    }
}

/// `GET /project` — list projects, optionally filtered.
pub async fn list(api: &ApiClient, token: Option<&str>, filter: &ProjectFilter) -> Result<Vec<Project>, ApiError> {
    api.call_json(token, filter.apply(Descriptor::get("/project"))).await
}

/// `GET /project/one/{id}`.
pub async fn get(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Project, ApiError> {
    api.call_json(token, Descriptor::get(format!("/project/one/{id}"))).await
}

/// `POST /project`.
pub async fn create(api: &ApiClient, token: Option<&str>, project: &NewProject) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::post("/project", json!(project))).await
}

/// `PUT /project/{id}`.
pub async fn update(api: &ApiClient, token: Option<&str>, id: &str, project: &NewProject) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::put(format!("/project/{id}"), json!(project)))
        .await
}

/// `DELETE /project/{id}`.
pub async fn remove(api: &ApiClient, token: Option<&str>, id: &str) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::delete(format!("/project/{id}"))).await
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
