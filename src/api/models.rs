//! Wire models for the remote invoicing service.
//!
//! Field names follow the remote contract (Mongo-style `_id`, camelCase
//! references); fields the service sometimes omits are optional. Creation
//! payloads mirror the forms the service accepts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: i64,
    pub postal: i64,
    pub city: String,
    pub province: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cif: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "projectCode", default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "clientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Embedded project reference carried by delivery notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
    #[serde(rename = "projectCode", default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryNote {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "clientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "projectId")]
    pub project: ProjectRef,
    /// `"material"` or `"hours"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub hours: f64,
    pub description: String,
    pub workdate: String,
}

// =============================================================================
// CREATION PAYLOADS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub cif: String,
    pub address: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(rename = "projectCode")]
    pub project_code: String,
    pub email: String,
    pub address: Address,
    pub code: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeliveryNote {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
    /// `"material"` or `"hours"`.
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default)]
    pub hours: f64,
    pub description: String,
    pub workdate: String,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
