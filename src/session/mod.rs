// ABOUTME: Session core shared by the auth manager and the request pipeline
// ABOUTME: Owns token persistence, the reactive user state, and the guarded logout sequence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Session lifecycle.
//!
//! [`Session`] is the one shared piece between the auth manager (which
//! establishes sessions) and the request pipeline (which ends them on a
//! 401). A session exists while both a token and a user record are
//! present; dropping either reads as unauthenticated.
//!
//! Logout is reentrancy-guarded: the in-progress flag is set
//! synchronously before any await point, so N concurrent 401s collapse
//! into a single teardown + navigation. The flag is released only once
//! navigation settles, success or failure, so a failed navigation never
//! wedges future logouts.

pub mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::constants::routes;
use crate::models::User;
use crate::navigation::Navigator;
use crate::storage::TokenStore;

pub use state::SessionState;

/// Shared session core: persisted token + reactive user state + guarded
/// logout
pub struct Session {
    store: Arc<TokenStore>,
    state: SessionState,
    navigator: Arc<dyn Navigator>,
    logging_out: AtomicBool,
}

impl Session {
    /// Build a session, hydrating the user state from the token store
    #[must_use]
    pub fn new(store: Arc<TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        let state = SessionState::new(store.cached_user());
        Self {
            store,
            state,
            navigator,
            logging_out: AtomicBool::new(false),
        }
    }

    /// Current bearer token, read from durable storage
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    /// Snapshot of the current user
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.current_user()
    }

    /// Subscribe to user replacements (login, refresh, logout)
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.state.subscribe()
    }

    /// Whether an authenticated session exists.
    ///
    /// Requires BOTH a user record and a token: a cached user whose
    /// token is gone reads as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.current_user().is_some() && self.store.token().is_some()
    }

    /// Navigator collaborator, shared with route guards
    #[must_use]
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Persist a fresh token + user and publish the new state.
    ///
    /// Called after a successful login or registration.
    pub(crate) fn establish(&self, token: &str, user: &User) {
        self.store.set_token(token);
        self.store.set_cached_user(user);
        self.state.set_user(user.clone());
        info!(user_id = user.id, "session established");
    }

    /// Refresh the cached user record after a profile fetch
    pub(crate) fn refresh_user(&self, user: &User) {
        self.store.set_cached_user(user);
        self.state.set_user(user.clone());
    }

    /// End the session: clear token, cached user, and state, then
    /// navigate to the login surface.
    ///
    /// Idempotent under concurrency: while a logout is in flight every
    /// further call returns immediately. Storage and state are cleared
    /// before the navigation await, so even a failed navigation leaves
    /// the session torn down.
    pub async fn logout(&self) {
        if self
            .logging_out
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("logout already in progress, ignoring");
            return;
        }

        self.store.clear_token();
        self.store.clear_cached_user();
        self.state.clear_user();
        info!("session cleared, navigating to login");

        if let Err(err) = self.navigator.navigate(routes::LOGIN_PAGE).await {
            warn!("post-logout navigation failed: {err}");
        }

        self.logging_out.store(false, Ordering::SeqCst);
    }
}
