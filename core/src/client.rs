//! The root client: configuration, request building and dispatch.
//!
//! # Design
//! `DuprClient` splits every call into `build_request`, which produces a
//! plain-data [`HttpRequest`], and `send`, which hands it to the
//! [`Transport`] and classifies the response. The resource facades returned
//! by `user()`, `matches()` and friends are thin descriptors on top of
//! [`DuprClient::request`].
//!
//! Only the bearer token can change after construction. It is read once per
//! `build_request`, so a new token applies to every later call and never to
//! one already built.

use std::fmt;
use std::time::Duration;

use parking_lot::RwLock;
use serde_json::Value;
use url::Url;

use crate::api::{
    AdminClient, BracketsClient, ClubsClient, EventsClient, MatchesClient, PlayersClient,
    UserClient,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpMethod, HttpRequest, Query};
use crate::response::parse_response;
use crate::transport::{Transport, UreqTransport};
use crate::Result;

pub struct DuprClient {
    base_url: String,
    default_version: String,
    timeout: Duration,
    bearer_token: RwLock<Option<String>>,
    transport: Box<dyn Transport>,
}

impl DuprClient {
    /// Client using the blocking `ureq` transport.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }

    /// Client configured from `DUPR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Client executing requests through a caller-supplied transport. The
    /// transport is expected to enforce `config.timeout` itself.
    pub fn with_transport(
        config: ClientConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        log::debug!(
            "creating client for {} (default version {})",
            config.base_url,
            config.default_version
        );

        Ok(Self {
            base_url: config.base_url,
            default_version: config.default_version,
            timeout: config.timeout,
            bearer_token: RwLock::new(config.bearer_token),
            transport: Box::new(transport),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_version(&self) -> &str {
        &self.default_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.bearer_token.read().clone()
    }

    /// Replaces the token used by all subsequent calls. An empty token
    /// clears it.
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.bearer_token.write() = Some(token).filter(|t| !t.is_empty());
    }

    pub fn clear_bearer_token(&self) {
        *self.bearer_token.write() = None;
    }

    pub fn user(&self) -> UserClient<'_> {
        UserClient::new(self)
    }

    pub fn matches(&self) -> MatchesClient<'_> {
        MatchesClient::new(self)
    }

    pub fn players(&self) -> PlayersClient<'_> {
        PlayersClient::new(self)
    }

    pub fn clubs(&self) -> ClubsClient<'_> {
        ClubsClient::new(self)
    }

    pub fn events(&self) -> EventsClient<'_> {
        EventsClient::new(self)
    }

    pub fn brackets(&self) -> BracketsClient<'_> {
        BracketsClient::new(self)
    }

    pub fn admin(&self) -> AdminClient<'_> {
        AdminClient::new(self)
    }

    /// Describe a call without performing it.
    ///
    /// The URL is `base_url/<version>/<path>` followed by the encoded query.
    /// `version` falls back to the configured default when `None` or empty.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        version: Option<&str>,
    ) -> Result<HttpRequest> {
        let version = version
            .map(|v| v.trim_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_version.as_str());
        let raw = format!(
            "{}/{}/{}",
            self.base_url,
            version,
            path.trim_start_matches('/')
        );

        let mut url = Url::parse(&raw)
            .map_err(|e| ApiError::generic(format!("Invalid request URL {raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = self.bearer_token.read().as_deref() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::generic(format!("Failed to serialize request body: {e}")))?;
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Execute a built request and interpret the response.
    pub fn send(&self, request: &HttpRequest) -> Result<Value> {
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.execute(request).map_err(|e| {
            log::warn!("{} {} failed: {e}", request.method, request.url);
            ApiError::from(e)
        })?;

        log::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            response.status,
            response.body.len()
        );
        parse_response(response)
    }

    /// Build and send in one step. Every facade method goes through here.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        version: Option<&str>,
    ) -> Result<Value> {
        let request = self.build_request(method, path, query, body, version)?;
        self.send(&request)
    }

    pub fn get(&self, path: &str, query: &Query) -> Result<Value> {
        self.request(HttpMethod::Get, path, query, None, None)
    }

    pub fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Post, path, &Query::new(), body, None)
    }

    pub fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Put, path, &Query::new(), body, None)
    }

    pub fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Patch, path, &Query::new(), body, None)
    }

    pub fn delete(&self, path: &str) -> Result<Value> {
        self.request(HttpMethod::Delete, path, &Query::new(), None, None)
    }
}

impl fmt::Debug for DuprClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuprClient")
            .field("base_url", &self.base_url)
            .field("default_version", &self.default_version)
            .field("timeout", &self.timeout)
            .field(
                "bearer_token",
                &self.bearer_token.read().as_ref().map(|_| "<redacted>"),
            )
            .finish_non_exhaustive()
    }
}
