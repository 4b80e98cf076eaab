//! Client routes — thin passthroughs over the remote client endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::failure;
use crate::api::clients::ClientFilter;
use crate::api::models::NewClient;
use crate::session;
use crate::state::AppState;

/// `GET /api/client` — list, with optional server-side filters.
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(filter): Query<ClientFilter>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::clients::list(&state.api, token.as_deref(), &filter).await {
        Ok(clients) => Json(clients).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `GET /api/client/{id}`.
pub async fn detail(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::clients::get(&state.api, token.as_deref(), &id).await {
        Ok(client) => Json(client).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `POST /api/client`.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(client): Json<NewClient>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::clients::create(&state.api, token.as_deref(), &client).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `PUT /api/client/{id}`.
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Json(client): Json<NewClient>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::clients::update(&state.api, token.as_deref(), &id, &client).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `DELETE /api/client/{id}`.
pub async fn remove(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::clients::remove(&state.api, token.as_deref(), &id).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => failure(jar, err),
    }
}

#[cfg(test)]
#[path = "clients_test.rs"]
mod tests;
