//! Session routes — login, registration, account validation, logout.
//!
//! Login and registration are the only two places the session cookie is
//! written, each with its own lifetime. Logout is local: the remote service
//! keeps no session state to tear down, so clearing the cookie is the whole
//! operation.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use super::failure;
use crate::api::auth::Credentials;
use crate::session;
use crate::state::AppState;

/// `POST /api/user/login` — authenticate and store the session cookie for
/// one hour.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Response {
    match crate::api::auth::login(&state.api, &credentials).await {
        Ok(grant) => {
            let jar = session::store(jar, &grant.token, session::LOGIN_TTL);
            (jar, Json(grant.body)).into_response()
        }
        Err(err) => failure(jar, err),
    }
}

/// `POST /api/user/register` — create an account and store the session
/// cookie for one day, pending code validation.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Response {
    match crate::api::auth::register(&state.api, &credentials).await {
        Ok(grant) => {
            let jar = session::store(jar, &grant.token, session::REGISTER_TTL);
            (jar, Json(grant.body)).into_response()
        }
        Err(err) => failure(jar, err),
    }
}

#[derive(Deserialize)]
pub struct ValidationBody {
    pub code: String,
}

/// `PUT /api/user/validation` — forward the emailed verification code.
pub async fn validate(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<ValidationBody>,
) -> Response {
    let token = session::token(&jar);
    match crate::api::auth::validate(&state.api, token.as_deref(), &body.code).await {
        Ok(value) => Json(value).into_response(),
        Err(err) => failure(jar, err),
    }
}

/// `POST /api/logout` — expire the session cookie.
pub async fn logout(jar: CookieJar) -> Response {
    (session::clear(jar), StatusCode::NO_CONTENT).into_response()
}

/// `GET /api/session` — whether a session cookie is present. Derived fresh
/// from the request on every call.
pub async fn session_probe(jar: CookieJar) -> Json<serde_json::Value> {
    Json(json!({ "authenticated": session::has_session(&jar) }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
