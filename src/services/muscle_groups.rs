// ABOUTME: Muscle group catalog service, a read-only resource over the request pipeline
// ABOUTME: Reactive list with loading and error state, cleared on logout
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use tokio::sync::watch;

use crate::constants::endpoints;
use crate::errors::ClientResult;
use crate::http::ApiClient;
use crate::models::MuscleGroup;
use crate::services::state::{ResourceSnapshot, ResourceState};

/// Reactive wrapper over the muscle group catalog
pub struct MuscleGroupService {
    client: Arc<ApiClient>,
    state: ResourceState<MuscleGroup>,
}

impl MuscleGroupService {
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
    pub fn muscle_groups(&self) -> Vec<MuscleGroup> {
        self.state.snapshot().items
    }

    /// Full observable state: items, loading flag, error message
    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<MuscleGroup> {
        self.state.snapshot()
    }

    /// Subscribe to state transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ResourceSnapshot<MuscleGroup>> {
        self.state.subscribe()
    }

    /// Number of muscle groups currently held
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.snapshot().items.len()
    }

    /// Fetch the whole catalog, replacing the collection wholesale.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn list(&self) -> ClientResult<Vec<MuscleGroup>> {
        self.state.begin();
        match self
            .client
            .get::<Vec<MuscleGroup>>(endpoints::MUSCLE_GROUPS)
            .await
        {
            Ok(groups) => {
                self.state.replace_all(groups.clone());
                Ok(groups)
            }
            Err(err) => {
                self.state.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch a single muscle group by id; the collection is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Records the error message in the state and re-raises it.
    pub async fn get(&self, id: i64) -> ClientResult<MuscleGroup> {
        self.state.begin();
        match self
            .client
            .get::<MuscleGroup>(&format!("{}/{id}", endpoints::MUSCLE_GROUPS))
            .await
        {
            Ok(group) => {
                self.state.finish();
                Ok(group)
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
