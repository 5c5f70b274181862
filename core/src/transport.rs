//! Execution of [`HttpRequest`] values.
//!
//! # Design
//! The client only describes requests; a [`Transport`] performs them. The
//! default [`UreqTransport`] runs one blocking round trip per call through a
//! pooled `ureq` agent. Non-2xx statuses come back as ordinary
//! [`HttpResponse`] values, and only faults that produce no response at all
//! are errors.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    /// `timeout` bounds the whole round trip, connect included.
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();

        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let body = request.body.as_deref().map(str::as_bytes);

        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(url);
                for (key, value) in &request.headers {
                    builder = builder.header(key, value);
                }
                match body {
                    Some(body) => builder.force_send_body().send(body),
                    None => builder.call(),
                }
            }
            HttpMethod::Delete => {
                let mut builder = self.agent.delete(url);
                for (key, value) in &request.headers {
                    builder = builder.header(key, value);
                }
                match body {
                    Some(body) => builder.force_send_body().send(body),
                    None => builder.call(),
                }
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => {
                let mut builder = match request.method {
                    HttpMethod::Post => self.agent.post(url),
                    HttpMethod::Put => self.agent.put(url),
                    _ => self.agent.patch(url),
                };
                for (key, value) in &request.headers {
                    builder = builder.header(key, value);
                }
                match body {
                    Some(body) => builder.send(body),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(error: ureq::Error) -> TransportError {
    let timed_out = match &error {
        ureq::Error::Timeout(_) => true,
        ureq::Error::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
        _ => false,
    };

    if timed_out {
        TransportError::Timeout(error.to_string())
    } else {
        TransportError::Connection(error.to_string())
    }
}
