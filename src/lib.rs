// ABOUTME: Main library entry point for the GymTrack client SDK
// ABOUTME: Session-scoped authenticated-request pipeline plus reactive resource services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # GymTrack Client
//!
//! A typed, async REST client for the GymTrack workout platform:
//! authentication and session lifecycle, an authenticated-request
//! pipeline, and reactive wrappers over the exercise, muscle group, and
//! routine resources.
//!
//! ## Features
//!
//! - **Session lifecycle**: login/register persist a bearer token and
//!   user record; logout tears both down exactly once even under
//!   concurrent 401s
//! - **Request pipeline**: bearer attachment with auth-endpoint
//!   exemption and 401-triggered logout
//! - **Reactive resources**: each service exposes `{items, loading,
//!   error}` snapshots plus a watch-channel subscription
//! - **Durable persistence**: token and cached user survive restarts via
//!   pluggable key-value storage
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gymtrack_client::{ClientConfig, ClientContext, MemoryStorage, NoopNavigator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let context = ClientContext::new(
//!         &config,
//!         Box::new(MemoryStorage::new()),
//!         Arc::new(NoopNavigator),
//!     )?;
//!
//!     let login = gymtrack_client::LoginRequest {
//!         email: "lifter@example.com".into(),
//!         password: "hunter2".into(),
//!     };
//!     context.auth().login(&login).await?;
//!     let routines = context.routines().list().await?;
//!     println!("{} routines", routines.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Storage**: durable key-value seam + token store
//! - **Session**: reactive user state and the guarded logout sequence
//! - **Http**: the pipeline every backend call flows through
//! - **Auth**: login/register/profile orchestration
//! - **Services**: per-resource reactive CRUD wrappers
//! - **Context**: explicit one-shot wiring, no ambient globals

/// Authentication lifecycle orchestration
pub mod auth;

/// Client configuration from environment variables
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Explicit dependency wiring for embedders
pub mod context;

/// Unified error types
pub mod errors;

/// Route access gates
pub mod guards;

/// Authenticated request pipeline
pub mod http;

/// Wire models for the backend REST surface
pub mod models;

/// Router collaborator seam
pub mod navigation;

/// Session core and reactive user state
pub mod session;

/// Per-resource reactive services
pub mod services;

/// Durable storage seam and token store
pub mod storage;

pub use auth::AuthManager;
pub use config::ClientConfig;
pub use context::ClientContext;
pub use errors::{ClientError, ClientResult};
pub use http::ApiClient;
pub use models::{
    AuthResponse, CreateRoutineRequest, Exercise, ExerciseSet, LoginRequest, MuscleGroup,
    RegisterRequest, Routine, RoutineExercise, RoutineExerciseInput, UpdateRoutineRequest, User,
};
pub use navigation::{Navigator, NoopNavigator};
pub use services::{ExerciseService, MuscleGroupService, ResourceSnapshot, RoutineService};
pub use session::{Session, SessionState};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, TokenStore};
