// ABOUTME: Wire models for the GymTrack backend REST surface
// ABOUTME: Auth payloads, exercise and muscle group catalogs, and the routine family
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Data models mirroring the backend wire shapes.
//!
//! Field casing follows the backend exactly: auth and catalog records use
//! snake_case, the routine family uses camelCase, and the auth response
//! mixes both (`accessToken` next to `token_type`). The serde attributes
//! below are the single source of truth for those quirks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated principal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned numeric identifier
    pub id: i64,
    /// Login email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Creation timestamp, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload posted to the registration endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response shape shared by the login and registration endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated principal
    pub user: User,
    /// Opaque bearer token for subsequent requests
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Token scheme, always `Bearer`
    pub token_type: String,
    /// Optional human-readable server message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An exercise from the exercise catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A muscle group from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Backend-assigned numeric identifier
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single set within a routine exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    /// Repetition count
    pub reps: u32,
    /// Working weight, unit decided by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Rest before the next set, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

/// An exercise as stored within a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercise {
    pub id: String,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A user-owned workout routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<RoutineExercise>,
    /// Owning user, as the backend serializes it
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Exercise data for creating or updating routines (no id yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExerciseInput {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for creating a new routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<RoutineExerciseInput>,
}

/// Request payload for updating an existing routine; absent fields are untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoutineRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<RoutineExerciseInput>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn auth_response_parses_mixed_casing() {
        let body = json!({
            "user": {"id": 1, "email": "a@b.c", "name": "Ada"},
            "accessToken": "tok",
            "token_type": "Bearer"
        });
        let parsed: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.access_token, "tok");
        assert_eq!(parsed.token_type, "Bearer");
        assert_eq!(parsed.user.id, 1);
        assert!(parsed.message.is_none());
    }

    #[test]
    fn routine_round_trips_camel_case() {
        let body = json!({
            "id": "r1",
            "name": "Push Day",
            "exercises": [{
                "id": "e1",
                "name": "Bench Press",
                "sets": [{"reps": 5, "weight": 80.0, "restSeconds": 120}]
            }],
            "userId": "42",
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z"
        });
        let parsed: Routine = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(parsed.user_id, "42");
        assert_eq!(parsed.exercises[0].sets[0].rest_seconds, Some(120));

        let reserialized = serde_json::to_value(&parsed).unwrap();
        assert_eq!(reserialized["userId"], body["userId"]);
        assert_eq!(
            reserialized["exercises"][0]["sets"][0]["restSeconds"],
            body["exercises"][0]["sets"][0]["restSeconds"]
        );
    }

    #[test]
    fn update_request_omits_absent_fields() {
        let update = UpdateRoutineRequest {
            name: Some("Pull Day".into()),
            ..UpdateRoutineRequest::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({"name": "Pull Day"}));
    }

    #[test]
    fn user_tolerates_missing_timestamps() {
        let parsed: User =
            serde_json::from_value(json!({"id": 7, "email": "x@y.z", "name": "Ox"})).unwrap();
        assert!(parsed.created_at.is_none());
        assert!(parsed.updated_at.is_none());
    }
}
