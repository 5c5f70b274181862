//! In-memory transport for unit tests.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers each with the same canned response,
/// or with a connection error when built with [`Recorder::failing`].
pub(crate) struct Recorder {
    response: Option<HttpResponse>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Recorder {
    pub(crate) fn ok(body: Value) -> Arc<Self> {
        Self::respond(HttpResponse::new(200, body.to_string()))
    }

    pub(crate) fn respond(response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            response: Some(response),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

impl Transport for Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request.clone());
        self.response
            .clone()
            .ok_or_else(|| TransportError::Connection("connection refused".to_string()))
    }
}
