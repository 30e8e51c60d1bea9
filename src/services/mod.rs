// ABOUTME: Resource services wrapping each backend REST resource
// ABOUTME: Shared reactive state container plus exercises, muscle groups, and routines
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Resource services.
//!
//! One service per backend resource, each pairing CRUD calls through the
//! request pipeline with a reactive `{items, loading, error}` container.
//! All three share the state machine in [`state`]; `clear()` on each is
//! part of logout hygiene so a previous session's data never leaks into
//! the next one.

pub mod exercises;
pub mod muscle_groups;
pub mod routines;
pub(crate) mod state;

pub use exercises::ExerciseService;
pub use muscle_groups::MuscleGroupService;
pub use routines::RoutineService;
pub use state::ResourceSnapshot;
