// ABOUTME: Auth manager orchestrating login, registration, profile refresh, and logout
// ABOUTME: Persists the session on success and leaves state untouched on failure
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Session controller.
//!
//! [`AuthManager`] drives the auth endpoints through the request
//! pipeline. Successful login/registration persists the token and user
//! atomically from the caller's point of view (token, cached user, and
//! reactive state all change before the call resolves); any failure
//! surfaces the error with no state change.

use std::sync::Arc;

use tracing::{info, warn};

use crate::constants::endpoints;
use crate::errors::ClientResult;
use crate::http::ApiClient;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::session::Session;

/// Orchestrates the authentication lifecycle over the pipeline
pub struct AuthManager {
    client: Arc<ApiClient>,
    session: Arc<Session>,
}

impl AuthManager {
    /// Bind the manager to a pipeline and its session
    #[must_use]
    pub fn new(client: Arc<ApiClient>, session: Arc<Session>) -> Self {
        Self { client, session }
    }

    /// Session handle, for state queries and subscriptions
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and user are persisted and the session state
    /// updated before the response is returned.
    ///
    /// # Errors
    ///
    /// A 401 here is a credential failure, not a session invalidation;
    /// state is left untouched and the error is surfaced unchanged.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self
            .client
            .post(endpoints::LOGIN, credentials)
            .await
            .map_err(|err| {
                warn!("login failed: {err}");
                err
            })?;
        self.session
            .establish(&response.access_token, &response.user);
        Ok(response)
    }

    /// Create an account and establish a session, symmetric to login.
    ///
    /// # Errors
    ///
    /// Surfaces the backend rejection unchanged; state is untouched on
    /// failure.
    pub async fn register(&self, data: &RegisterRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self
            .client
            .post(endpoints::REGISTER, data)
            .await
            .map_err(|err| {
                warn!("registration failed: {err}");
                err
            })?;
        self.session
            .establish(&response.access_token, &response.user);
        info!(user_id = response.user.id, "registration succeeded");
        Ok(response)
    }

    /// Fetch the authenticated principal and refresh the cached record.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors; a 401 will already have ended the
    /// session by the time the error reaches the caller.
    pub async fn current_user(&self) -> ClientResult<User> {
        let user: User = self.client.get(endpoints::USER).await?;
        self.session.refresh_user(&user);
        Ok(user)
    }

    /// End the session. Reentrancy-guarded; see [`Session::logout`].
    pub async fn logout(&self) {
        self.session.logout().await;
    }
}
