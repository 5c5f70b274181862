use serde_json::{json, Value};

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::BracketStatus;
use crate::Result;

/// Tournament brackets. Seeding happens on the service.
#[derive(Clone, Copy, Debug)]
pub struct BracketsClient<'a> {
    scope: Scope<'a>,
}

impl<'a> BracketsClient<'a> {
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

    pub fn save_bracket(&self, bracket: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/bracket/save", Some(bracket))
    }

    pub fn edit_bracket(&self, bracket: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Post, "/bracket/edit", Some(bracket))
    }

    pub fn get_bracket(&self, bracket_id: u64) -> Result<Value> {
        self.scope
            .get(&format!("/bracket/{bracket_id}"), &Query::new())
    }

    pub fn update_status(&self, bracket_id: u64, status: BracketStatus) -> Result<Value> {
        let body = json!({ "status": status });
        self.scope.send(
            HttpMethod::Post,
            &format!("/bracket/{bracket_id}/status"),
            Some(&body),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{body, client};

    #[test]
    fn save_edit_get() {
        let (client, recorder) = client();
        let bracket = json!({"eventId": 500, "type": "DOUBLE_ELIMINATION"});
        client.brackets().save_bracket(&bracket).unwrap();
        client.brackets().edit_bracket(&bracket).unwrap();
        client.brackets().get_bracket(42).unwrap();

        let sent = recorder.requests();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].url, "https://example.test/v1.0/bracket/save");
        assert_eq!(sent[1].method, HttpMethod::Post);
        assert_eq!(sent[1].url, "https://example.test/v1.0/bracket/edit");
        assert_eq!(body(&sent[1]), bracket);
        assert_eq!(sent[2].url, "https://example.test/v1.0/bracket/42");
    }

    #[test]
    fn update_status_sends_enum_name() {
        let (client, recorder) = client();
        client
            .brackets()
            .update_status(42, BracketStatus::InProgress)
            .unwrap();

        let req = recorder.last();
        assert_eq!(req.url, "https://example.test/v1.0/bracket/42/status");
        assert_eq!(body(&req), json!({"status": "IN_PROGRESS"}));
    }
}
