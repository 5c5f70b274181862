//! Error types for the DUPR client.
//!
//! # Design
//! Every failed call produces exactly one [`ApiError`]. The error is a single
//! struct tagged with an [`ApiErrorKind`] rather than one type per failure, so
//! callers can handle everything uniformly through `ApiError` or match on
//! `kind()` for targeted handling such as backing off on
//! [`ApiErrorKind::RateLimit`].
//!
//! `status_code` and `response` are present whenever the failure came from an
//! HTTP response. Transport faults (timeouts, refused connections) are
//! [`ApiErrorKind::Generic`] with neither.

use thiserror::Error;

use crate::http::HttpResponse;

/// Which class of failure an [`ApiError`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 401: missing, invalid or expired bearer token.
    Authentication,
    /// 400: the service rejected the request payload.
    Validation,
    /// 404
    NotFound,
    /// 429
    RateLimit,
    /// 500–599
    Server,
    /// Any other failure: unexpected status codes, unparseable success
    /// bodies and transport faults.
    Generic,
}

impl ApiErrorKind {
    /// Kind for a non-2xx status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Authentication,
            400 => ApiErrorKind::Validation,
            404 => ApiErrorKind::NotFound,
            429 => ApiErrorKind::RateLimit,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Generic,
        }
    }
}

/// Error returned by every client operation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status_code: Option<u16>,
    response: Option<Box<HttpResponse>>,
}

impl ApiError {
    pub(crate) fn from_response(
        kind: ApiErrorKind,
        message: String,
        response: HttpResponse,
    ) -> Self {
        Self {
            kind,
            message,
            status_code: Some(response.status),
            response: Some(Box::new(response)),
        }
    }

    pub(crate) fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Generic,
            message: message.into(),
            status_code: None,
            response: None,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The raw response the error was built from, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_deref()
    }

    pub fn is_authentication(&self) -> bool {
        self.kind == ApiErrorKind::Authentication
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ApiErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn is_rate_limit(&self) -> bool {
        self.kind == ApiErrorKind::RateLimit
    }

    pub fn is_server(&self) -> bool {
        self.kind == ApiErrorKind::Server
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        self.status_code.is_none() && self.response.is_none()
    }
}

/// Faults raised by a [`Transport`](crate::transport::Transport) before any
/// HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::generic(error.to_string())
    }
}

/// Invalid [`ClientConfig`](crate::config::ClientConfig) values, reported
/// when the client is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported base URL scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    #[error("API version must not be empty")]
    EmptyVersion,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}
