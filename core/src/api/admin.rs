use serde_json::Value;

use super::Scope;
use crate::client::DuprClient;
use crate::http::{HttpMethod, Query};
use crate::Result;

/// Operations reserved for administrator tokens. A regular user token gets
/// an authentication or validation error from the service.
#[derive(Clone, Copy, Debug)]
pub struct AdminClient<'a> {
    scope: Scope<'a>,
}

impl<'a> AdminClient<'a> {
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

    pub fn get_user_profile(&self, user_id: u64) -> Result<Value> {
        self.scope
            .get(&format!("/admin/user/{user_id}/profile"), &Query::new())
    }

    pub fn update_user_profile(&self, user_id: u64, profile: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Put,
            &format!("/admin/user/{user_id}/profile"),
            Some(profile),
        )
    }

    pub fn signup_user(&self, user: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Put, "/admin/user/signup", Some(user))
    }

    pub fn delete_user(&self, user_id: u64) -> Result<Value> {
        self.scope.delete(&format!("/admin/user/{user_id}"))
    }

    pub fn update_player_rating(&self, player_id: u64, rating: &Value) -> Result<Value> {
        self.scope.send(
            HttpMethod::Post,
            &format!("/admin/player/{player_id}/rating"),
            Some(rating),
        )
    }

    /// `ratings` is passed through as-is, typically a list of
    /// `{playerId, rating}` objects.
    pub fn batch_update_player_ratings(&self, ratings: &Value) -> Result<Value> {
        self.scope
            .send(HttpMethod::Post, "/admin/player/rating/batch", Some(ratings))
    }
}
