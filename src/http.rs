// ABOUTME: Authenticated request pipeline for the GymTrack backend
// ABOUTME: Attaches bearer tokens, classifies auth endpoints, and ends the session on 401
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Request Pipeline
//!
//! Every backend call flows through [`ApiClient`]:
//!
//! 1. The target URL is classified: a path whose final segment is
//!    `login` or `register` is an auth endpoint. The check runs on the
//!    URL path component, so query strings and trailing slashes cannot
//!    skew it, and `/user/login-history` is NOT an auth endpoint.
//! 2. A stored bearer token is attached as `Authorization: Bearer
//!    <token>`, but never to auth endpoints, so a stale token cannot
//!    corrupt a fresh login or registration attempt.
//! 3. Non-success responses become [`ClientError::Api`]. A 401 from a
//!    protected endpoint ends the session (guarded logout + redirect)
//!    before the error is returned; a 401 from an auth endpoint is a
//!    plain credential failure and leaves the session alone.
//!
//! In-flight requests are never cancelled by a logout; a straggler that
//! comes back 401 performs its own no-op logout.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult};
use crate::session::Session;

/// HTTP client bound to a session: the authenticated-request pipeline
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for invalid configuration and
    /// [`ClientError::Transport`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> ClientResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Session this pipeline is bound to
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and deserialize the JSON response
    ///
    /// # Errors
    ///
    /// Propagates transport and API-status errors per the pipeline rules.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url_for(path);
        let response = self.execute(self.http.get(&url), &url).await?;
        Ok(response.json().await?)
    }

    /// POST `body` to `path` and deserialize the JSON response
    ///
    /// # Errors
    ///
    /// Propagates transport and API-status errors per the pipeline rules.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        let response = self.execute(self.http.post(&url).json(body), &url).await?;
        Ok(response.json().await?)
    }

    /// PUT `body` to `path` and deserialize the JSON response
    ///
    /// # Errors
    ///
    /// Propagates transport and API-status errors per the pipeline rules.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        let response = self.execute(self.http.put(&url).json(body), &url).await?;
        Ok(response.json().await?)
    }

    /// DELETE `path`, discarding any response body
    ///
    /// # Errors
    ///
    /// Propagates transport and API-status errors per the pipeline rules.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url_for(path);
        self.execute(self.http.delete(&url), &url).await?;
        Ok(())
    }

    /// Run one request through the pipeline
    async fn execute(&self, request: RequestBuilder, url: &str) -> ClientResult<Response> {
        let auth_endpoint = is_auth_endpoint(url);

        let request = match self.session.token() {
            Some(token) if !auth_endpoint => {
                request.header(AUTHORIZATION, format!("Bearer {token}"))
            }
            _ => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED && !auth_endpoint {
            debug!("401 from protected endpoint {url}, ending session");
            self.session.logout().await;
        } else if status == StatusCode::UNAUTHORIZED {
            warn!("credential failure from auth endpoint {url}");
        }

        Err(ClientError::Api { status, message })
    }
}

/// Whether `url` targets an auth endpoint (`login` or `register`).
///
/// Matches on the final path segment of the URL path component: exact
/// segment equality, never substring search, so query strings, trailing
/// slashes, and lookalike paths such as `/user/login-history` cannot
/// produce false positives.
fn is_auth_endpoint(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).next_back())
        .is_some_and(|segment| segment == "login" || segment == "register")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_register_are_auth_endpoints() {
        assert!(is_auth_endpoint("http://localhost:3000/api/login"));
        assert!(is_auth_endpoint("http://localhost:3000/api/register"));
        assert!(is_auth_endpoint("https://api.example.com/login"));
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert!(is_auth_endpoint("http://localhost:3000/api/login/"));
        assert!(is_auth_endpoint("http://localhost:3000/api/login?next=home"));
        assert!(is_auth_endpoint("http://localhost:3000/api/register/?a=1"));
    }

    #[test]
    fn lookalike_paths_are_not_auth_endpoints() {
        // Substring matching would wrongly classify these
        assert!(!is_auth_endpoint("http://localhost:3000/api/user/login-history"));
        assert!(!is_auth_endpoint("http://localhost:3000/api/loginattempts"));
        assert!(!is_auth_endpoint("http://localhost:3000/api/login/history"));
        assert!(!is_auth_endpoint("http://localhost:3000/api/preregister-info"));
    }

    #[test]
    fn ordinary_resource_paths_are_not_auth_endpoints() {
        assert!(!is_auth_endpoint("http://localhost:3000/api/routines"));
        assert!(!is_auth_endpoint("http://localhost:3000/api/user"));
        assert!(!is_auth_endpoint("http://localhost:3000/api/muscleGroups/3"));
    }

    #[test]
    fn unparseable_urls_are_not_auth_endpoints() {
        assert!(!is_auth_endpoint("not a url"));
        assert!(!is_auth_endpoint(""));
    }
}
