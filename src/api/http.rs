//! Authenticated request client.
//!
//! DESIGN
//! ======
//! One descriptor in, one typed result out. The client attaches the bearer
//! token and normalizes every way a call can go wrong into [`ApiError`];
//! it never touches the credential store itself — callers read the token
//! from the request cookies and decide what to do on `Unauthorized`.
//!
//! An auth-requiring descriptor with no token short-circuits before any
//! network I/O. No retries and no client-side timeouts: each user action
//! issues at most one request, and a failure is terminal for that action.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{ApiError, error_message};

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Specification of one remote API call. Constructed per call, never stored.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Whether the call must carry a session token. Defaults to true; only
    /// the login and registration endpoints opt out.
    pub requires_auth: bool,
}

impl Descriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, requires_auth: true }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut descriptor = Self::new(Method::POST, path);
        descriptor.body = Some(body);
        descriptor
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut descriptor = Self::new(Method::PUT, path);
        descriptor.body = Some(body);
        descriptor
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Mark the call as not requiring a session token.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Append one query pair. Pairs are only serialized when at least one is
    /// present, so an unfiltered list sends no query string at all.
    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client bound to the remote service's base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform the call and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] kind; `Decode` when the 2xx body is not valid JSON
    /// for `T`.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        token: Option<&str>,
        descriptor: Descriptor,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(token, &descriptor).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Perform the call and return the raw body, for binary downloads.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] kind; `Decode` when the body cannot be read.
    pub async fn call_bytes(&self, token: Option<&str>, descriptor: Descriptor) -> Result<Vec<u8>, ApiError> {
        let response = self.dispatch(token, &descriptor).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn dispatch(&self, token: Option<&str>, descriptor: &Descriptor) -> Result<reqwest::Response, ApiError> {
        if descriptor.requires_auth && token.is_none() {
            return Err(ApiError::Unauthenticated);
        }

        let url = format!("{}{}", self.base_url, descriptor.path);
        let mut request = self
            .http
            .request(descriptor.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // 401 wins regardless of whatever body the server attached.
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
