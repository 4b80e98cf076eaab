//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two routers merged under one Axum app: the page router (HTML shells
//! behind the session guard) and the data router (`/api/...`), which fronts
//! the remote invoicing service. Data handlers never talk to the network
//! themselves — they read the session cookie, hand a descriptor to the API
//! client and translate the typed outcome into a response.

pub mod auth;
pub mod clients;
pub mod delivery_notes;
pub mod pages;
pub mod projects;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router, middleware};
use axum_extra::extract::cookie::CookieJar;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::ApiError;
use crate::guard::{self, RouteGuard};
use crate::session;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, route_guard: RouteGuard) -> Router {
    let pages = Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/clientes", get(pages::clients))
        .route("/clientes/crear", get(pages::client_create))
        .route("/clientes/{id}", get(pages::client_detail))
        .route("/proyectos", get(pages::projects))
        .route("/proyectos/crear", get(pages::project_create))
        .route("/proyectos/{id}", get(pages::project_detail))
        .route("/albaranes", get(pages::delivery_notes))
        .route("/albaranes/crear", get(pages::delivery_note_create))
        .layer(middleware::from_fn_with_state(route_guard, guard::require_session));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let data = Router::new()
        .route("/api/user/login", post(auth::login))
        .route("/api/user/register", post(auth::register))
        .route("/api/user/validation", put(auth::validate))
        .route("/api/logout", post(auth::logout))
        .route("/api/session", get(auth::session_probe))
        .route("/api/client", get(clients::list).post(clients::create))
        .route(
            "/api/client/{id}",
            get(clients::detail).put(clients::update).delete(clients::remove),
        )
        .route("/api/project", get(projects::list).post(projects::create))
        .route("/api/project/one/{id}", get(projects::detail))
        .route("/api/project/{id}", put(projects::update).delete(projects::remove))
        .route(
            "/api/deliverynote",
            get(delivery_notes::list).post(delivery_notes::create),
        )
        .route(
            "/api/deliverynote/{id}",
            get(delivery_notes::detail).delete(delivery_notes::remove),
        )
        .route("/api/deliverynote/pdf/{id}", get(delivery_notes::pdf))
        .layer(cors)
        .with_state(state);

    pages.merge(data).layer(TraceLayer::new_for_http())
}

/// Translate a failed remote call into an HTTP response.
///
/// `Unauthorized` additionally expires the session cookie so the next
/// navigation lands on the login page; every other kind leaves the store
/// untouched.
pub(crate) fn failure(jar: CookieJar, err: ApiError) -> Response {
    tracing::warn!(error = %err, "remote api call failed");
    let status = match &err {
        ApiError::Unauthenticated | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        ApiError::Transport(_) | ApiError::Decode(_) => StatusCode::BAD_GATEWAY,
        ApiError::Api { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
    };
    let body = Json(serde_json::json!({ "message": err.to_string() }));
    if matches!(err, ApiError::Unauthorized) {
        (status, session::clear(jar), body).into_response()
    } else {
        (status, body).into_response()
    }
}
