// ABOUTME: Navigator trait seam for the router collaborator
// ABOUTME: Exposes route changes with a completion signal, plus a no-op default
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use async_trait::async_trait;
use tracing::debug;

use crate::errors::ClientResult;

/// Router collaborator: navigate to a client-side route and report
/// whether the navigation settled successfully.
///
/// The session layer only ever awaits completion; it never inspects
/// where navigation actually landed. A failed navigation is logged by
/// the caller and does not undo session teardown.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `path`, resolving once navigation settles
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ClientError::Navigation`] when the route
    /// change could not be completed.
    async fn navigate(&self, path: &str) -> ClientResult<()>;
}

/// Navigator that records nothing and always succeeds.
///
/// The default for headless embedders (tooling, sync jobs) that have no
/// routing surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn navigate(&self, path: &str) -> ClientResult<()> {
        debug!("navigation to {path} requested (no-op navigator)");
        Ok(())
    }
}
