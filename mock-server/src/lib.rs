//! Scriptable stand-in for the DUPR backend.
//!
//! Tests register canned responses ("stubs") keyed by method and path, point
//! a client at the server, and afterwards inspect every request the server
//! received. Stubs can be registered over HTTP through the `/__admin`
//! routes or, from synchronous test code, through [`MockServer`].
//!
//! When several stubs match the same request they are served in
//! registration order, and the last one keeps answering. Unmatched requests
//! get a 404 with a JSON `message`.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A canned response for one `(method, path)` pair. `path` never contains
/// the query string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stub {
    pub method: String,
    pub path: String,
    pub status: u16,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub delay_ms: u64,
}

impl Stub {
    pub fn new(method: &str, path: &str, status: u16, body: impl Into<String>) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            status,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = delay.as_millis() as u64;
        self
    }

    fn matches(&self, method: &str, path: &str) -> bool {
        self.method.eq_ignore_ascii_case(method) && self.path == path
    }
}

/// A request as seen by the server. Header names are lower-case.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The body parsed as JSON, `None` when empty or not JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[derive(Debug, Default)]
pub struct MockState {
    stubs: Vec<Stub>,
    received: Vec<RecordedRequest>,
}

impl MockState {
    pub fn add_stub(&mut self, stub: Stub) {
        self.stubs.push(stub);
    }

    pub fn received(&self) -> &[RecordedRequest] {
        &self.received
    }

    fn take_stub(&mut self, method: &str, path: &str) -> Option<Stub> {
        let (first, more) = {
            let mut matching = self
                .stubs
                .iter()
                .enumerate()
                .filter(|(_, stub)| stub.matches(method, path))
                .map(|(idx, _)| idx);
            let first = matching.next()?;
            (first, matching.next().is_some())
        };

        if more {
            Some(self.stubs.remove(first))
        } else {
            Some(self.stubs[first].clone())
        }
    }
}

pub type Db = Arc<RwLock<MockState>>;

pub fn app(db: Db) -> Router {
    Router::new()
        .route(
            "/__admin/stubs",
            get(list_stubs).post(add_stub).delete(reset),
        )
        .route("/__admin/requests", get(list_requests))
        .fallback(replay)
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

async fn list_stubs(State(db): State<Db>) -> Json<Vec<Stub>> {
    Json(db.read().await.stubs.clone())
}

async fn add_stub(State(db): State<Db>, Json(stub): Json<Stub>) -> StatusCode {
    db.write().await.add_stub(stub);
    StatusCode::CREATED
}

async fn reset(State(db): State<Db>) -> StatusCode {
    let mut state = db.write().await;
    state.stubs.clear();
    state.received.clear();
    StatusCode::NO_CONTENT
}

async fn list_requests(State(db): State<Db>) -> Json<Vec<RecordedRequest>> {
    Json(db.read().await.received.clone())
}

async fn replay(
    State(db): State<Db>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let stub = {
        let mut state = db.write().await;
        state.received.push(recorded);
        state.take_stub(method.as_str(), uri.path())
    };

    let Some(stub) = stub else {
        let message = format!("no stub for {} {}", method, uri.path());
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": message })),
        )
            .into_response();
    };

    if stub.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(stub.delay_ms)).await;
    }

    let status = StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], stub.body).into_response()
}

/// A mock server running on its own thread, driven from synchronous code.
///
/// The listener is bound before [`MockServer::start`] returns, so requests
/// can be sent immediately.
pub struct MockServer {
    addr: SocketAddr,
    db: Db,
}

impl MockServer {
    pub fn start() -> Result<Self, std::io::Error> {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = std_listener.local_addr()?;
        std_listener.set_nonblocking(true)?;

        let db = Db::default();
        let server_db = db.clone();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        std::thread::spawn(move || {
            runtime.block_on(async move {
                let listener = TcpListener::from_std(std_listener)?;
                run(listener, server_db).await
            })
        });

        Ok(Self { addr, db })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Registers a stub. Must not be called from inside an async runtime.
    pub fn stub(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.mount(Stub::new(method, path, status, body));
    }

    pub fn mount(&self, stub: Stub) {
        self.db.blocking_write().add_stub(stub);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.db.blocking_read().received.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.db.blocking_read().received.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_deserializes_with_defaults() {
        let stub: Stub =
            serde_json::from_str(r#"{"method":"GET","path":"/v1.0/user/profile","status":200}"#)
                .unwrap();
        assert_eq!(stub.body, "");
        assert_eq!(stub.delay_ms, 0);
    }

    #[test]
    fn stub_method_is_case_insensitive() {
        let stub = Stub::new("get", "/v1.0/match/1", 200, "{}");
        assert!(stub.matches("GET", "/v1.0/match/1"));
        assert!(!stub.matches("GET", "/v1.0/match/2"));
        assert!(!stub.matches("DELETE", "/v1.0/match/1"));
    }

    #[test]
    fn single_stub_keeps_answering() {
        let mut state = MockState::default();
        state.add_stub(Stub::new("GET", "/a", 200, "1"));
        assert_eq!(state.take_stub("GET", "/a").unwrap().body, "1");
        assert_eq!(state.take_stub("GET", "/a").unwrap().body, "1");
    }

    #[test]
    fn repeated_stubs_are_served_in_order() {
        let mut state = MockState::default();
        state.add_stub(Stub::new("POST", "/a", 200, "first"));
        state.add_stub(Stub::new("POST", "/a", 200, "second"));
        state.add_stub(Stub::new("GET", "/b", 200, "other"));

        assert_eq!(state.take_stub("POST", "/a").unwrap().body, "first");
        assert_eq!(state.take_stub("POST", "/a").unwrap().body, "second");
        assert_eq!(state.take_stub("POST", "/a").unwrap().body, "second");
        assert_eq!(state.take_stub("GET", "/b").unwrap().body, "other");
    }

    #[test]
    fn missing_stub_yields_none() {
        let mut state = MockState::default();
        assert!(state.take_stub("GET", "/nothing").is_none());
    }

    #[test]
    fn recorded_request_header_lookup_ignores_case() {
        let req = RecordedRequest {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: None,
            headers: vec![("authorization".to_string(), "Bearer abc".to_string())],
            body: String::new(),
        };
        assert_eq!(req.header("Authorization"), Some("Bearer abc"));
        assert!(req.header("content-type").is_none());
        assert!(req.json().is_none());
    }
}
