//! Delivery-note routes, including the PDF download.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::failure;
use crate::api::models::NewDeliveryNote;
use crate::session;
use crate::state::AppState;

/// `GET /api/deliverynote` — list all delivery notes.
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = session::token(&jar);
    match crate::api::delivery_notes::list(&state.api, token.as_deref()).await {
        Ok(notes) => Json(notes).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `GET /api/deliverynote/{id}`.
pub async fn detail(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::delivery_notes::get(&state.api, token.as_deref(), &id).await {
        Ok(note) => Json(note).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `POST /api/deliverynote`.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(note): Json<NewDeliveryNote>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::delivery_notes::create(&state.api, token.as_deref(), &note).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `DELETE /api/deliverynote/{id}`.
pub async fn remove(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::delivery_notes::remove(&state.api, token.as_deref(), &id).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `GET /api/deliverynote/pdf/{id}` — download the note as an attachment.
pub async fn pdf(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> Response {
    let token = session::token(&jar);
    match crate::api::delivery_notes::pdf(&state.api, token.as_deref(), &id).await {
        Ok(bytes) => (
            [
                (CONTENT_TYPE, "application/pdf".to_owned()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"Albaran_{id}.pdf\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => failure(jar, err),
    }
}

#[cfg(test)]
#[path = "delivery_notes_test.rs"]
mod tests;
