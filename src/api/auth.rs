//! Account endpoints — login, registration, account validation.
//!
//! Login and registration are the only public calls in the contract; both
//! answer with a body carrying the session token. Account validation runs
//! authenticated with the freshly granted token.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::error::ApiError;
use super::http::{ApiClient, Descriptor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A granted session: the extracted token plus the untouched response body.
#[derive(Debug, Clone)]
pub struct SessionGrant {
    pub token: String,
    pub body: Value,
}

/// `POST /user/login` — exchange credentials for a session token.
///
/// # Errors
///
/// Any [`ApiError`] kind; `Decode` when the response carries no token.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<SessionGrant, ApiError> {
    grant(api, "/user/login", credentials).await
}

/// `POST /user/register` — create an account; also answers with a token.
///
/// # Errors
///
/// Any [`ApiError`] kind; `Decode` when the response carries no token.
pub async fn register(api: &ApiClient, credentials: &Credentials) -> Result<SessionGrant, ApiError> {
    grant(api, "/user/register", credentials).await
}

async fn grant(api: &ApiClient, path: &str, credentials: &Credentials) -> Result<SessionGrant, ApiError> {
    let body: Value = api
        .call_json(None, Descriptor::post(path, json!(credentials)).public())
        .await?;
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Decode("response carried no session token".to_owned()))?;
    Ok(SessionGrant { token, body })
}

/// `PUT /user/validation` — confirm the emailed verification code.
///
/// # Errors
///
/// Any [`ApiError`] kind; `Api` carries the server's message when the code
/// is wrong.
pub async fn validate(api: &ApiClient, token: Option<&str>, code: &str) -> Result<Value, ApiError> {
    api.call_json(token, Descriptor::put("/user/validation", json!({ "code": code })))
        .await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
