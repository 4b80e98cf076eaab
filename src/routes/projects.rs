//! Project routes.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::failure;
use crate::api::models::NewProject;
use crate::api::projects::ProjectFilter;
use crate::session;
use crate::state::AppState;

/// `GET /api/project` — list, with optional server-side filters.
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(filter): Query<ProjectFilter>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::projects::list(&state.api, token.as_deref(), &filter).await {
        Ok(projects) => Json(projects).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `GET /api/project/one/{id}`.
pub async fn detail(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::projects::get(&state.api, token.as_deref(), &id).await {
        Ok(project) => Json(project).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `POST /api/project`.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(project): Json<NewProject>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::projects::create(&state.api, token.as_deref(), &project).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `PUT /api/project/{id}`.
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Json(project): Json<NewProject>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::projects::update(&state.api, token.as_deref(), &id, &project).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `DELETE /api/project/{id}`.
pub async fn remove(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::projects::remove(&state.api, token.as_deref(), &id).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => failure(jar, err),
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
