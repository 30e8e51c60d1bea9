// ABOUTME: Durable key-value storage seam and the token store built on top of it
// ABOUTME: Persists the bearer token and cached user record across client restarts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Session persistence.
//!
//! [`KeyValueStorage`] is the durable storage collaborator: a synchronous
//! string-keyed store with the non-throwing semantics of origin-scoped
//! browser storage. [`FileStorage`] keeps one file per key under the
//! platform data directory; [`MemoryStorage`] backs tests and embedders
//! that do not want disk state.
//!
//! [`TokenStore`] owns the two persisted session keys: the opaque bearer
//! token and the serialized user record. Reads fail soft: malformed
//! cached-user data reads as no user, never as an error.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::constants::{service, storage_keys};
use crate::errors::{ClientError, ClientResult};
use crate::models::User;

/// Durable, synchronous key-value storage medium.
///
/// Implementations must not panic on IO trouble; a failed write is logged
/// and dropped, matching the storage medium this models.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str);
    /// Remove `key` and its value, if present
    fn remove(&self, key: &str);
}

/// File-backed storage: one file per key under a root directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the platform-local data directory.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the platform provides no data
    /// directory.
    pub fn new() -> ClientResult<Self> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| ClientError::config("no platform data directory available"))?;
        Ok(Self::with_root(base.join(service::DATA_DIR)))
    }

    /// Create storage rooted at an explicit directory
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.root)
            .and_then(|()| fs::write(self.key_path(key), value));
        if let Err(err) = result {
            warn!("failed to persist storage key {key}: {err}");
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!("failed to remove storage key {key}: {err}"),
        }
    }
}

/// In-memory storage for tests and stateless embedders
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// Persisted session state: bearer token plus cached user record.
///
/// The token is opaque to the client: created on successful login or
/// registration, destroyed on logout, never mutated in place.
pub struct TokenStore {
    storage: Box<dyn KeyValueStorage>,
}

impl TokenStore {
    /// Wrap a storage medium
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Current bearer token, if one is stored
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(storage_keys::AUTH_TOKEN)
    }

    /// Replace the stored bearer token
    pub fn set_token(&self, token: &str) {
        self.storage.set(storage_keys::AUTH_TOKEN, token);
    }

    /// Remove the stored bearer token
    pub fn clear_token(&self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
    }

    /// Cached user record, if present and well-formed.
    ///
    /// Malformed data is discarded and reads as `None`; the next
    /// successful auth call rewrites it.
    #[must_use]
    pub fn cached_user(&self) -> Option<User> {
        let raw = self.storage.get(storage_keys::AUTH_USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                debug!("discarding malformed cached user record: {err}");
                None
            }
        }
    }

    /// Replace the cached user record
    pub fn set_cached_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(storage_keys::AUTH_USER, &json),
            Err(err) => warn!("failed to serialize user for caching: {err}"),
        }
    }

    /// Remove the cached user record
    pub fn clear_cached_user(&self) {
        self.storage.remove(storage_keys::AUTH_USER);
    }
}
