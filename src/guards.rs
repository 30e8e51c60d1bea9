// ABOUTME: Route access gates consulting the session before a surface renders
// ABOUTME: Redirect unauthenticated visitors to login and authenticated ones off public pages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use tracing::{debug, warn};

use crate::constants::routes;
use crate::session::Session;

/// Gate for protected surfaces.
///
/// Returns `true` when an authenticated session exists; otherwise
/// redirects to the login surface and returns `false`. Navigation
/// failures are logged, never surfaced; the access decision stands
/// either way.
pub async fn require_authenticated(session: &Session) -> bool {
    if session.is_authenticated() {
        debug!("access granted to protected surface");
        return true;
    }

    warn!("unauthenticated access attempt, redirecting to login");
    if let Err(err) = session.navigator().navigate(routes::LOGIN_PAGE).await {
        warn!("redirect to login failed: {err}");
    }
    false
}

/// Gate for public surfaces (login, registration).
///
/// Returns `true` for anonymous visitors; an already-authenticated user
/// is redirected home and gets `false`.
pub async fn require_anonymous(session: &Session) -> bool {
    if !session.is_authenticated() {
        return true;
    }

    debug!("authenticated visitor on public surface, redirecting home");
    if let Err(err) = session.navigator().navigate(routes::HOME_PAGE).await {
        warn!("redirect to home failed: {err}");
    }
    false
}
