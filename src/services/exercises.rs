// ABOUTME: Exercise catalog service, a read-only resource over the request pipeline
// ABOUTME: Reactive list with loading and error state, cleared on logout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use tokio::sync::watch;

use crate::constants::endpoints;
use crate::errors::ClientResult;
use crate::http::ApiClient;
use crate::models::Exercise;
use crate::services::state::{ResourceSnapshot, ResourceState};

/// Reactive wrapper over the exercise catalog
pub struct ExerciseService {
    client: Arc<ApiClient>,
    state: ResourceState<Exercise>,
}

impl ExerciseService {
    /// Bind the service to the request pipeline
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: ResourceState::new(),
        }
    }

    /// Snapshot of the current catalog
    #[must_use]
    pub fn exercises(&self) -> Vec<Exercise> {
        self.state.snapshot().items
    }

    /// Full observable state: items, loading flag, error message
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Exercise> {
        self.state.snapshot()
    }

    /// Subscribe to state transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ResourceSnapshot<Exercise>> {
        self.state.subscribe()
    }

    /// Number of exercises currently held
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.snapshot().items.len()
    }

    /// Fetch the whole catalog, replacing the collection wholesale.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn list(&self) -> ClientResult<Vec<Exercise>> {
        self.state.begin();
        match self.client.get::<Vec<Exercise>>(endpoints::EXERCISES).await {
            Ok(exercises) => {
                self.state.replace_all(exercises.clone());
                Ok(exercises)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch a single exercise by id; the collection is left untouched.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn get(&self, id: &str) -> ClientResult<Exercise> {
        self.state.begin();
        match self
            .client
            .get::<Exercise>(&format!("{}/{id}", endpoints::EXERCISES))
            .await
        {
            Ok(exercise) => {
                self.state.finish();
                Ok(exercise)
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
