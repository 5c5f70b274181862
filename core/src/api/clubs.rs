use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::{Page, TextSearch};
use crate::Result;

/// Clubs and club membership.
#[derive(Clone, Copy, Debug)]
pub struct ClubsClient<'a> {
    scope: Scope<'a>,
}

impl<'a> ClubsClient<'a> {
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

    pub fn add_club(&self, club: &Value) -> Result<Value> {
        self.scope.send(HttpMethod::Put, "/club/add", Some(club))
    }

    pub fn get_club(&self, club_id: u64) -> Result<Value> {
        self.scope.get(&format!("/club/{club_id}"), &Query::new())
    }

    pub fn search_clubs(&self, search: &TextSearch) -> Result<Value> {
        self.scope.get("/club/search", &search.to_query())
    }

    /// Adds a member directly. Requires director rights on the club.
    pub fn add_member(&self, club_id: u64, member: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Put,
            &format!("/club/{club_id}/members/add"),
            Some(member),
        )
    }

    /// Requests membership for the authenticated user.
    pub fn join_club(&self, club_id: u64) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, &format!("/club/{club_id}/members/join"), None)
    }

    pub fn invite_member(&self, club_id: u64, invitation: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Put,
            &format!("/club/{club_id}/members/invite"),
            Some(invitation),
        )
    }

    pub fn get_club_members(&self, club_id: u64, page: Page) -> Result<Value> {
        let mut query = Query::new();
        page.append_to(&mut query);
        self.scope.get(&format!("/club/{club_id}/members"), &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{body, client};
    use serde_json::json;

    #[test]
    fn add_get_and_search() {
        let (client, recorder) = client();
        let club = json!({"name": "Downtown Pickleball"});
        client.clubs().add_club(&club).unwrap();
        client.clubs().get_club(100).unwrap();
        client
            .clubs()
            .search_clubs(&TextSearch::new("Downtown"))
            .unwrap();

        let sent = recorder.requests();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].url, "https://example.test/v1.0/club/add");
        assert_eq!(body(&sent[0]), club);
        assert_eq!(sent[1].url, "https://example.test/v1.0/club/100");
        assert_eq!(
            sent[2].url,
            "https://example.test/v1.0/club/search?query=Downtown&limit=20&offset=0"
        );
    }

    #[test]
    fn membership_operations() {
        let (client, recorder) = client();
        client
            .clubs()
            .add_member(100, &json!({"userId": 12345}))
            .unwrap();
        client.clubs().join_club(100).unwrap();
        client
            .clubs()
            .invite_member(100, &json!({"email": "friend@example.com"}))
            .unwrap();
        client
            .clubs()
            .get_club_members(100, Page::default())
            .unwrap();

        let sent = recorder.requests();
        assert_eq!(sent[0].url, "https://example.test/v1.0/club/100/members/add");
        assert_eq!(sent[1].method, HttpMethod::Put);
        assert_eq!(sent[1].url, "https://example.test/v1.0/club/100/members/join");
        assert!(sent[1].body.is_none());
        assert!(sent[1].header("content-type").is_none());
        assert_eq!(sent[2].url, "https://example.test/v1.0/club/100/members/invite");
        assert_eq!(
            sent[3].url,
            "https://example.test/v1.0/club/100/members?limit=20&offset=0"
        );
    }
}
