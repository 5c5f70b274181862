//! Blocking client for the DUPR rating service HTTP API.
//!
//! # Overview
//! [`DuprClient`] turns namespaced calls such as
//! `client.matches().get_match(789)` into authenticated HTTP requests and
//! turns the responses into either the parsed JSON payload or a single
//! [`ApiError`]. Ratings, validation and bracket seeding all happen on the
//! service; this crate only moves requests and payloads.
//!
//! # Design
//! - Requests and responses are plain data ([`HttpRequest`],
//!   [`HttpResponse`]). `DuprClient::build_request` describes a call, a
//!   [`Transport`] performs it, and [`response::parse_response`] classifies
//!   the result.
//! - Payloads are `serde_json::Value`. The service owns the schema.
//! - Errors are one [`ApiError`] type tagged with an [`ApiErrorKind`]. There
//!   is no retry; callers that want to back off on
//!   [`ApiErrorKind::RateLimit`] do so themselves.
//! - Configuration is an explicit [`ClientConfig`]; the bearer token is the
//!   only setting that can change afterwards.
//!
//! ```no_run
//! use dupr_core::{ClientConfig, DuprClient, MatchSearch, Page};
//!
//! let client = DuprClient::new(ClientConfig::new().with_bearer_token("token"))?;
//! let profile = client.user().get_profile()?;
//! println!("{}", profile["result"]["fullName"]);
//!
//! let mut search = MatchSearch::for_player(12345);
//! loop {
//!     let page = client.matches().search_matches(&search)?;
//!     let hits = page["result"].as_array().map(Vec::len).unwrap_or(0);
//!     if hits == 0 {
//!         break;
//!     }
//!     search.page = search.page.next();
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{
    AdminClient, BracketsClient, ClubsClient, EventsClient, MatchesClient, PlayersClient,
    UserClient,
};
pub use client::DuprClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Query};
pub use transport::{Transport, UreqTransport};
pub use types::{BracketStatus, MatchSearch, Page, RatingType, TextSearch};

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
