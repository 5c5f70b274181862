use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::types::Page;
use crate::Result;

/// The authenticated user's own profile, settings and activity.
#[derive(Clone, Copy, Debug)]
pub struct UserClient<'a> {
    scope: Scope<'a>,
}

impl<'a> UserClient<'a> {
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

    pub fn get_profile(&self) -> Result<Value> {
        self.scope.get("/user/profile", &Query::new())
    }

    pub fn update_profile(&self, profile: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/user/profile", Some(profile))
    }

    pub fn get_settings(&self) -> Result<Value> {
        self.scope.get("/user/settings", &Query::new())
    }

    pub fn update_settings(&self, settings: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/user/settings", Some(settings))
    }

    pub fn update_preferences(&self, preferences: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/user/preferences", Some(preferences))
    }

    /// A player's activity feed, newest first.
    pub fn get_activities(&self, player_id: u64, page: Page) -> Result<Value> {
        let mut query = Query::new();
        page.append_to(&mut query);
        self.scope
            .get(&format!("/user/{player_id}/activities"), &query)
    }
}
