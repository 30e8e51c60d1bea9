// ABOUTME: In-memory reactive holder for the current authenticated user
// ABOUTME: Watch-channel backed so UI layers can subscribe to session changes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use tokio::sync::watch;

use crate::models::User;

/// Reactive view of the current user.
///
/// Snapshots are cheap clones out of a [`watch`] channel; subscribers
/// receive every replacement. The holder itself knows nothing about
/// tokens; the authenticated predicate lives on
/// [`Session`](super::Session), which also checks token presence.
pub struct SessionState {
    user: watch::Sender<Option<User>>,
}

impl SessionState {
    /// Create state seeded with a previously cached user, if any
    #[must_use]
    pub fn new(initial: Option<User>) -> Self {
        let (user, _) = watch::channel(initial);
        Self { user }
    }

    /// Snapshot of the current user
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// Subscribe to user replacements
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }

    pub(crate) fn set_user(&self, user: User) {
        self.user.send_replace(Some(user));
    }

    pub(crate) fn clear_user(&self) {
        self.user.send_replace(None);
    }
}
