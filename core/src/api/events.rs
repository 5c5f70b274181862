use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::TextSearch;
use crate::Result;

/// Leagues, tournaments and registration.
#[derive(Clone, Copy, Debug)]
pub struct EventsClient<'a> {
    scope: Scope<'a>,
}

impl<'a> EventsClient<'a> {
    pub(crate) fn new(client: &'a DuprClient) -> Self {
        Self {
            scope: Scope::new(client),
        }
    }

    pub fn version(self, version: &'a str) -> Self {
        Self {
            scope: self.scope.with_version(version),
        }
    }

    pub fn create_league(&self, league: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/event/league/create", Some(league))
    }

    pub fn get_event(&self, event_id: u64) -> Result<Value> {
        self.scope.get(&format!("/event/{event_id}"), &Query::new())
    }

    pub fn search_events(&self, search: &TextSearch) -> Result<Value> {
        self.scope.get("/event/search", &search.to_query())
    }

    pub fn register(&self, event_id: u64, registration: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Put,
            &format!("/event/{event_id}/register"),
            Some(registration),
        )
    }
}
