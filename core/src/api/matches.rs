use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::MatchSearch;
use crate::Result;

/// Recording, looking up and simulating matches.
#[derive(Clone, Copy, Debug)]
pub struct MatchesClient<'a> {
    scope: Scope<'a>,
}

impl<'a> MatchesClient<'a> {
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

    /// Records a new match. The service replies with the new match id in
    /// `result`.
    pub fn save_match(&self, match_data: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/match/save", Some(match_data))
    }

    pub fn get_match(&self, match_id: u64) -> Result<Value> {
        self.scope.get(&format!("/match/{match_id}"), &Query::new())
    }

    /// One page of matches for a player, club or event. Callers page by
    /// advancing `search.page` until an empty result comes back.
    pub fn search_matches(&self, search: &MatchSearch) -> Result<Value> {
        self.scope.get("/match/search", &search.to_query())
    }

    pub fn update_match(&self, match_data: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Post, "/match/update", Some(match_data))
    }

    /// Records a match coming from a verified source such as a sanctioned
    /// tournament.
    pub fn save_verified_match(&self, match_data: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/match/verified/save", Some(match_data))
    }

    pub fn delete_match(&self, match_id: u64) -> Result<Value> {
        self.scope.delete(&format!("/match/{match_id}"))
    }

    /// Asks the service how a hypothetical match would move each team's
    /// rating. Nothing is recorded.
    pub fn get_match_rating_impact(&self, match_data: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Post, "/match/rating-simulator", Some(match_data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{body, client};
    use crate::types::Page;
    use serde_json::json;

    #[test]
    fn save_match_puts_body() {
        let (client, recorder) = client();
        let match_data = json!({
            "format": "singles",
            "team1": [{"playerId": 123}],
            "team2": [{"playerId": 456}],
            "scores": [{"team1": 11, "team2": 5}]
        });
        client.matches().save_match(&match_data).unwrap();

        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://example.test/v1.0/match/save");
        assert_eq!(body(&req), match_data);
    }

    #[test]
    fn get_and_delete_use_match_id_in_path() {
        let (client, recorder) = client();
        client.matches().get_match(789).unwrap();
        client.matches().delete_match(789).unwrap();

        let sent = recorder.requests();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, "https://example.test/v1.0/match/789");
        assert_eq!(sent[1].method, HttpMethod::Delete);
        assert_eq!(sent[1].url, "https://example.test/v1.0/match/789");
        assert!(sent[1].body.is_none());
    }

    #[test]
    fn search_defaults_to_first_page_of_twenty() {
        let (client, recorder) = client();
        client
            .matches()
            .search_matches(&MatchSearch::for_player(12345))
            .unwrap();

        let req = recorder.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://example.test/v1.0/match/search?playerId=12345&limit=20&offset=0"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn search_with_all_filters() {
        let (client, recorder) = client();
        let search = MatchSearch {
            player_id: Some(12345),
            club_id: Some(100),
            event_id: Some(500),
            page: Page::new(10, 20),
        };
        client.matches().search_matches(&search).unwrap();

        assert_eq!(
            recorder.last().url,
            "https://example.test/v1.0/match/search?playerId=12345&clubId=100&eventId=500&limit=10&offset=20"
        );
    }

    #[test]
    fn update_verified_and_simulator_paths() {
        let (client, recorder) = client();
        let data = json!({"matchId": 789});
        client.matches().update_match(&data).unwrap();
        client.matches().save_verified_match(&data).unwrap();
        client.matches().get_match_rating_impact(&data).unwrap();

        let sent = recorder.requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "https://example.test/v1.0/match/update");
        assert_eq!(sent[1].method, HttpMethod::Put);
        assert_eq!(sent[1].url, "https://example.test/v1.0/match/verified/save");
        assert_eq!(sent[2].method, HttpMethod::Post);
        assert_eq!(sent[2].url, "https://example.test/v1.0/match/rating-simulator");
        assert_eq!(body(&sent[2]), data);
    }
}
