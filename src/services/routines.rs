// ABOUTME: Routine resource service with full CRUD over the request pipeline
// ABOUTME: Keeps the in-memory collection synchronized by in-place edits, never refetches
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::constants::endpoints;
use crate::errors::ClientResult;
use crate::http::ApiClient;
use crate::models::{CreateRoutineRequest, Routine, UpdateRoutineRequest};
use crate::services::state::{ResourceSnapshot, ResourceState};

/// Reactive CRUD wrapper over the user's workout routines
pub struct RoutineService {
    client: Arc<ApiClient>,
    state: ResourceState<Routine>,
}

impl RoutineService {
    /// Bind the service to the request pipeline
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    /// Snapshot of the current collection
    #[must_use]
    pub fn routines(&self) -> Vec<Routine> {
        self.state.snapshot().items
    }

    /// Full observable state: items, loading flag, error message
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Routine> {
        self.state.snapshot()
    }

    /// Subscribe to state transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ResourceSnapshot<Routine>> {
        self.state.subscribe()
    }

    /// Number of routines currently held
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.snapshot().items.len()
    }

    /// Fetch all routines for the authenticated user, replacing the
    /// collection wholesale.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn list(&self) -> ClientResult<Vec<Routine>> {
        self.state.begin();
        match self.client.get::<Vec<Routine>>(endpoints::ROUTINES).await {
            Ok(routines) => {
                self.state.replace_all(routines.clone());
                Ok(routines)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch a single routine by id; the collection is left untouched.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn get(&self, id: &str) -> ClientResult<Routine> {
        self.state.begin();
        match self
            .client
            .get::<Routine>(&format!("{}/{id}", endpoints::ROUTINES))
            .await
        {
            Ok(routine) => {
                self.state.finish();
                Ok(routine)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a routine; on success the new record is appended.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn create(&self, request: &CreateRoutineRequest) -> ClientResult<Routine> {
        self.state.begin();
        match self
            .client
            .post::<_, Routine>(endpoints::ROUTINES, request)
            .await
        {
            Ok(routine) => {
                debug!(routine_id = %routine.id, "routine created");
                self.state.append(routine.clone());
                Ok(routine)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Update a routine; on success the matching record is replaced in
    /// place.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn update(&self, id: &str, request: &UpdateRoutineRequest) -> ClientResult<Routine> {
        self.state.begin();
        match self
            .client
            .put::<_, Routine>(&format!("{}/{id}", endpoints::ROUTINES), request)
            .await
        {
            Ok(routine) => {
                self.state.replace_where(|r| r.id == id, routine.clone());
                Ok(routine)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete a routine; on success exactly the matching record is
    /// removed.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.state.begin();
        match self
            .client
            .delete(&format!("{}/{id}", endpoints::ROUTINES))
            .await
        {
            Ok(()) => {
                self.state.remove_where(|r| r.id == id);
                Ok(())
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Reset collection, loading, and error to their initial values;
    /// called on logout
    pub fn clear(&self) {
        self.state.clear();
    }
}
