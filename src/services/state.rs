// ABOUTME: Reactive request-bound state container shared by the resource services
// ABOUTME: Tracks collection, loading flag, and error message through each call lifecycle
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Per-resource reactive state.
//!
//! Every resource service owns a [`ResourceState`] that moves through
//! the same lifecycle: idle → loading (error cleared) → idle with fresh
//! data, or idle with an error message. Mutations edit the collection in
//! place (append, replace-by-match, remove-by-match), never by
//! refetching.

use tokio::sync::watch;

/// Snapshot of a resource service's observable state
#[derive(Debug, Clone)]
pub struct ResourceSnapshot<T> {
    /// Current in-memory collection
    pub items: Vec<T>,
    /// Whether a call is in flight
    pub loading: bool,
    /// Message from the most recent failed call, cleared on the next call
    pub error: Option<String>,
}

impl<T> Default for ResourceSnapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Watch-channel holder driving a resource service's state transitions
pub(crate) struct ResourceState<T> {
    inner: watch::Sender<ResourceSnapshot<T>>,
}

impl<T: Clone> ResourceState<T> {
    pub fn new() -> Self {
        let (inner, _) = watch::channel(ResourceSnapshot::default());
        Self { inner }
    }

    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        self.inner.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResourceSnapshot<T>> {
        self.inner.subscribe()
    }

    /// A call is starting: raise the loading flag, clear the last error
    pub fn begin(&self) {
        self.inner.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// A call finished without touching the collection
    pub fn finish(&self) {
        self.inner.send_modify(|state| state.loading = false);
    }

    /// A call failed: record the message, keep the collection as-is
    pub fn fail(&self, message: String) {
        self.inner.send_modify(|state| {
            state.loading = false;
            state.error = Some(message);
        });
    }

    /// A fetch succeeded: replace the collection wholesale
    pub fn replace_all(&self, items: Vec<T>) {
        self.inner.send_modify(|state| {
            state.items = items;
            state.loading = false;
        });
    }

    /// A create succeeded: append the new record
    pub fn append(&self, item: T) {
        self.inner.send_modify(|state| {
            state.items.push(item);
            state.loading = false;
        });
    }

    /// An update succeeded: replace the matching record in place
    pub fn replace_where(&self, matches: impl Fn(&T) -> bool, item: T) {
        self.inner.send_modify(|state| {
            for existing in &mut state.items {
                if matches(existing) {
                    *existing = item.clone();
                }
            }
            state.loading = false;
        });
    }

    /// A delete succeeded: drop the matching record
    pub fn remove_where(&self, matches: impl Fn(&T) -> bool) {
        self.inner.send_modify(|state| {
            state.items.retain(|existing| !matches(existing));
            state.loading = false;
        });
    }

    /// Reset to initial values; used on logout so a previous session's
    /// data cannot leak into the next one
    pub fn clear(&self) {
        self.inner.send_replace(ResourceSnapshot::default());
    }
}
