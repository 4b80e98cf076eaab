//! Route guard for protected pages.
//!
//! Navigation to a protected path without a session cookie is answered with
//! a redirect to the login page; everything else passes through untouched.
//! This is a presence check only — a stale token still passes and is caught
//! later by the remote service's 401.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session;

/// Protected path set plus the redirect target. Exact path matches only, so
/// sub-pages such as `/clientes/crear` stay open unless listed.
#[derive(Clone)]
pub struct RouteGuard {
    protected: Arc<HashSet<String>>,
    login_path: Arc<str>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(protected: &[String], login_path: &str) -> Self {
        Self {
            protected: Arc::new(protected.iter().cloned().collect()),
            login_path: Arc::from(login_path),
        }
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected.contains(path)
    }
}

/// Middleware: redirect unauthenticated navigation on protected paths.
pub async fn require_session(State(guard): State<RouteGuard>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if guard.is_protected(path) && session::token_from_headers(request.headers()).is_none() {
        tracing::debug!(%path, "no session cookie, redirecting to login");
        return Redirect::temporary(&guard.login_path).into_response();
    }
    next.run(request).await
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
