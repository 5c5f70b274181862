//! Resource facades.
//!
//! One client per resource family, each borrowing the root
//! [`DuprClient`]. Every method is a fixed `(verb, path, parameter
//! placement)` triple: identifiers go into the path, lookups and searches
//! put their parameters in the query string, and creates and updates send
//! the caller's JSON as the body without inspecting it.
//!
//! Calling `.version("v2.0")` on a facade overrides the API version for the
//! calls made through that facade value only.

mod admin;
mod brackets;
mod clubs;
mod events;
mod matches;
mod players;
mod user;

pub use admin::AdminClient;
pub use brackets::BracketsClient;
pub use clubs::ClubsClient;
pub use events::EventsClient;
pub use matches::MatchesClient;
pub use players::PlayersClient;
pub use user::UserClient;

use serde_json::Value;

use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::Result;

/// The client plus an optional version override, shared by all facades.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scope<'a> {
    client: &'a DuprClient,
    version: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(client: &'a DuprClient) -> Self {
        Self {
            client,
            version: None,
        }
    }

    pub(crate) fn with_version(self, version: &'a str) -> Self {
        Self {
            version: Some(version),
            ..self
        }
    }

    pub(crate) fn get(&self, path: &str, query: &Query) -> Result<Value> {
        self.client
            .request(HttpMethod::Get, path, query, None, self.version)
    }

    pub(crate) fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.client
            .request(method, path, &Query::new(), body, self.version)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Value> {
        self.send(HttpMethod::Delete, path, None)
    }
}
