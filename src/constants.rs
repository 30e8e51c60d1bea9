// ABOUTME: Application constants organized by domain for the GymTrack client
// ABOUTME: Endpoint paths, durable storage keys, client routes, and environment defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being spread
//! across the modules that consume them.

use std::env;

/// Backend REST endpoint paths, relative to the configured base URL
pub mod endpoints {
    /// Login endpoint (credential exchange, no bearer token attached)
    pub const LOGIN: &str = "/login";
    /// Registration endpoint (no bearer token attached)
    pub const REGISTER: &str = "/register";
    /// Authenticated principal endpoint
    pub const USER: &str = "/user";
    /// Exercise catalog collection
    pub const EXERCISES: &str = "/exercises";
    /// Muscle group catalog collection
    pub const MUSCLE_GROUPS: &str = "/muscleGroups";
    /// User-owned routine collection
    pub const ROUTINES: &str = "/routines";
}

/// Durable storage keys for the persisted session
pub mod storage_keys {
    /// Bearer token for the active session
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Serialized user record cached alongside the token
    pub const AUTH_USER: &str = "auth_user";
}

/// Client-side route targets handed to the navigator collaborator
pub mod routes {
    /// Login surface, the destination after logout
    pub const LOGIN_PAGE: &str = "/login";
    /// Home surface, the destination for already-authenticated visitors
    pub const HOME_PAGE: &str = "/home";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Environment variable naming the backend base URL
    pub const API_URL_ENV: &str = "GYMTRACK_API_URL";
    /// Environment variable naming the HTTP timeout in seconds
    pub const HTTP_TIMEOUT_ENV: &str = "GYMTRACK_HTTP_TIMEOUT_SECS";

    /// Default backend base URL for local development
    pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
    /// Default HTTP timeout in seconds
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

    /// Get backend base URL from environment or default
    #[must_use]
    pub fn api_url() -> String {
        env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
    }

    /// Get HTTP timeout from environment or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var(HTTP_TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }
}

/// Service identity constants
pub mod service {
    /// User agent sent with every outgoing request
    pub const USER_AGENT: &str = concat!("gymtrack-client/", env!("CARGO_PKG_VERSION"));
    /// Directory name for durable client state under the platform data dir
    pub const DATA_DIR: &str = "gymtrack";
}
