use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::{Page, RatingType, TextSearch};
use crate::Result;

/// Player lookup and rating queries.
#[derive(Clone, Copy, Debug)]
pub struct PlayersClient<'a> {
    scope: Scope<'a>,
}

impl<'a> PlayersClient<'a> {
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

    pub fn search_players(&self, search: &TextSearch) -> Result<Value> {
        self.scope.get("/player/search", &search.to_query())
    }

    pub fn get_player(&self, player_id: u64) -> Result<Value> {
        self.scope
            .get(&format!("/player/{player_id}"), &Query::new())
    }

    /// Rating history, optionally narrowed to singles or doubles.
    pub fn get_rating_history(
        &self,
        player_id: u64,
        rating_type: Option<RatingType>,
    ) -> Result<Value> {
        let mut query = Query::new();
        query.push_opt("type", rating_type.map(|t| t.as_str()));
        self.scope
            .get(&format!("/player/{player_id}/rating-history"), &query)
    }

    pub fn get_player_matches(&self, player_id: u64, page: Page) -> Result<Value> {
        let mut query = Query::new();
        page.append_to(&mut query);
        self.scope
            .get(&format!("/player/{player_id}/matches"), &query)
    }

    /// Links an unclaimed player record to the authenticated account.
    pub fn claim_player(&self, player_id: u64, claim: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Put,
            &format!("/player/{player_id}/claim"),
            Some(claim),
        )
    }

    /// Expected score for a matchup, computed by the service.
    pub fn calculate_expected_score(&self, matchup: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Post, "/player/expected-score", Some(matchup))
    }
}
