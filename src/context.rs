// ABOUTME: One-shot assembly of the client object graph with explicit dependency injection
// ABOUTME: Storage feeds the session, the session feeds the pipeline, services share the pipeline
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Client context.
//!
//! Embedders construct one [`ClientContext`] at startup and pass pieces
//! by reference to consumers. There are no ambient globals: every
//! component receives its dependencies explicitly, and the context is
//! the single place the wiring order lives.

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::ClientConfig;
use crate::errors::ClientResult;
use crate::http::ApiClient;
use crate::navigation::Navigator;
use crate::services::{ExerciseService, MuscleGroupService, RoutineService};
use crate::session::Session;
use crate::storage::{KeyValueStorage, TokenStore};

/// Fully wired client: session, pipeline, auth manager, and the three
/// resource services, all sharing one HTTP client and one session
pub struct ClientContext {
    session: Arc<Session>,
    client: Arc<ApiClient>,
    auth: AuthManager,
    exercises: ExerciseService,
    muscle_groups: MuscleGroupService,
    routines: RoutineService,
}

impl ClientContext {
    /// Wire the full object graph.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ClientError::Config`] for invalid
    /// configuration and [`crate::errors::ClientError::Transport`] when
    /// the HTTP client cannot be built.
    pub fn new(
        config: &ClientConfig,
        storage: Box<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let store = Arc::new(TokenStore::new(storage));
        let session = Arc::new(Session::new(store, navigator));
        let client = Arc::new(ApiClient::new(config, Arc::clone(&session))?);

        Ok(Self {
            auth: AuthManager::new(Arc::clone(&client), Arc::clone(&session)),
            exercises: ExerciseService::new(Arc::clone(&client)),
            muscle_groups: MuscleGroupService::new(Arc::clone(&client)),
            routines: RoutineService::new(Arc::clone(&client)),
            session,
            client,
        })
    }

    /// Shared session handle
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Request pipeline, for embedders adding bespoke calls
    #[must_use]
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Authentication lifecycle
    #[must_use]
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Exercise catalog service
    #[must_use]
    pub fn exercises(&self) -> &ExerciseService {
        &self.exercises
    }

    /// Muscle group catalog service
    #[must_use]
    pub fn muscle_groups(&self) -> &MuscleGroupService {
        &self.muscle_groups
    }

    /// Routine CRUD service
    #[must_use]
    pub fn routines(&self) -> &RoutineService {
        &self.routines
    }

    /// Reset every resource service; called alongside logout so a new
    /// session starts from empty collections
    pub fn clear_resources(&self) {
        self.exercises.clear();
        self.muscle_groups.clear();
        self.routines.clear();
    }
}
