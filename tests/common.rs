// ABOUTME: Shared test utilities for gymtrack_client integration tests
// ABOUTME: Provides quiet logging, wiremock fixtures, navigators, and body builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(dead_code, clippy::unwrap_used, clippy::wildcard_in_or_patterns)]

//! Shared test utilities for `gymtrack_client`
//!
//! Common setup to reduce duplication across integration tests: a
//! mock-server-backed client fixture, recording/failing navigators, and
//! JSON body builders matching the backend wire shapes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use gymtrack_client::{
    constants::storage_keys, ClientConfig, ClientContext, ClientError, ClientResult,
    KeyValueStorage, MemoryStorage, Navigator,
};
use serde_json::{json, Value};
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Navigator that records every navigation, optionally after a delay
/// and optionally failing, so tests can observe logout coordination
pub struct RecordingNavigator {
    calls: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail: false,
        }
    }

    /// Hold each navigation open for `delay` before settling, so
    /// concurrent logout attempts overlap deterministically
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    /// Fail every navigation, for logout-failure coverage
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Number of navigations that settled successfully
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of navigations attempted, settled or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Paths navigated to, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, path: &str) -> ClientResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(ClientError::Navigation("router offline".into()));
        }
        self.calls.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

/// Storage handle tests can keep after the context takes ownership,
/// to assert on persisted state or simulate a client restart
#[derive(Clone)]
pub struct SharedStorage(pub Arc<MemoryStorage>);

impl SharedStorage {
    pub fn new() -> Self {
        Self(Arc::new(MemoryStorage::new()))
    }

    /// Seed a bearer token, as if left over from a previous session
    pub fn seed_token(&self, token: &str) {
        self.0.set(storage_keys::AUTH_TOKEN, token);
    }

    /// Seed a raw cached-user value (valid or garbage)
    pub fn seed_user_raw(&self, raw: &str) {
        self.0.set(storage_keys::AUTH_USER, raw);
    }

    pub fn token(&self) -> Option<String> {
        self.0.get(storage_keys::AUTH_TOKEN)
    }

    pub fn cached_user_raw(&self) -> Option<String> {
        self.0.get(storage_keys::AUTH_USER)
    }
}

impl Default for SharedStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for SharedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

/// A wired client context talking to a wiremock server
pub struct TestHarness {
    pub server: MockServer,
    pub context: ClientContext,
    pub navigator: Arc<RecordingNavigator>,
    pub storage: SharedStorage,
}

/// Standard harness: fresh storage, immediate navigator
pub async fn harness() -> TestHarness {
    harness_with(RecordingNavigator::new(), SharedStorage::new()).await
}

/// Harness with explicit navigator and storage
pub async fn harness_with(navigator: RecordingNavigator, storage: SharedStorage) -> TestHarness {
    init_test_logging();
    let server = MockServer::start().await;
    let navigator = Arc::new(navigator);

    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        user_agent: "gymtrack-client-tests/0.1".into(),
    };
    let context = ClientContext::new(
        &config,
        Box::new(storage.clone()),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    )
    .unwrap();

    TestHarness {
        server,
        context,
        navigator,
        storage,
    }
}

/// Requests the mock server received for a given path
pub async fn requests_to(server: &MockServer, path: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .into_iter()
        .filter(|request| request.url.path() == path)
        .collect()
}

/// Whether a recorded request carried any Authorization header
pub fn has_authorization(request: &wiremock::Request) -> bool {
    request
        .headers
        .keys()
        .any(|name| name.as_str().eq_ignore_ascii_case("authorization"))
}

/// Backend user record body
pub fn user_body(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", name.to_lowercase()),
        "name": name,
        "created_at": "2024-01-10T08:00:00Z",
        "updated_at": "2024-01-10T08:00:00Z"
    })
}

/// Login/register response body
pub fn auth_response_body(token: &str, user_id: i64, name: &str) -> Value {
    json!({
        "user": user_body(user_id, name),
        "accessToken": token,
        "token_type": "Bearer"
    })
}

/// Routine record body with a single exercise
pub fn routine_body(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "exercises": [{
            "id": format!("{id}-e1"),
            "name": "Bench Press",
            "sets": [{"reps": 5, "weight": 80.0, "restSeconds": 120}]
        }],
        "userId": "1",
        "createdAt": "2024-01-15T10:30:00Z",
        "updatedAt": "2024-01-15T10:30:00Z"
    })
}

/// Exercise catalog record body
pub fn exercise_body(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "muscle_group": "Chest",
        "equipment": "Barbell"
    })
}

/// Muscle group catalog record body
pub fn muscle_group_body(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}
