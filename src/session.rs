//! Session credential store.
//!
//! DESIGN
//! ======
//! The bearer token lives in a single cookie and nowhere else: it is written
//! on login/registration, re-read from the request jar on every authenticated
//! call, and expired on logout. No in-memory copy survives across requests,
//! so "is there a session" is always derived fresh from the jar rather than
//! cached in application state.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie holding the remote service's bearer token.
pub const SESSION_COOKIE: &str = "jwt";

/// Session lifetime granted by the login flow.
pub const LOGIN_TTL: Duration = Duration::seconds(3600);
/// Session lifetime granted by the registration flow.
pub const REGISTER_TTL: Duration = Duration::seconds(86_400);

/// Read the session token from the jar. An absent or empty cookie means no
/// session.
#[must_use]
pub fn token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Read the session token straight from request headers. Used where no jar
/// extractor runs, e.g. inside middleware.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    token(&CookieJar::from_headers(headers))
}

/// Whether a session token is currently present. Computed fresh per call.
#[must_use]
pub fn has_session(jar: &CookieJar) -> bool {
    token(jar).is_some()
}

/// Store the token with the given lifetime. Returns the jar so the caller
/// can attach it to the response.
#[must_use]
pub fn store(jar: CookieJar, token: &str, ttl: Duration) -> CookieJar {
    jar.add(session_cookie(token.to_owned(), ttl))
}

/// Expire the session cookie immediately. Safe to call when no cookie is
/// set.
#[must_use]
pub fn clear(jar: CookieJar) -> CookieJar {
    jar.add(session_cookie(String::new(), Duration::ZERO))
}

fn session_cookie(value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .build()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
