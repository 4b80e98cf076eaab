//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the remote API client — the session token itself lives in the
//! browser cookie and is re-read from the request on every call, so there is
//! no cross-request mutable state to coordinate.

use crate::api::ApiClient;

/// Shared application state. Clone is required by Axum — the API client is a
/// cheap handle around a pooled HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

impl AppState {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}
