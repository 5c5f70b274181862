//! Parameter types shared by the resource facades.
//!
//! # Design
//! Request and response payloads stay `serde_json::Value`; the service owns
//! their schema. The types here only cover what the client itself places in
//! query strings or closed value sets like [`BracketStatus`].

use serde::{Deserialize, Serialize};

use crate::http::Query;

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

/// Offset/limit pagination. Unset fields fall back to `limit=20` and
/// `offset=0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Page {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    /// The page after this one. The offset stops at `u32::MAX`.
    pub fn next(&self) -> Self {
        Self::new(self.limit(), self.offset().saturating_add(self.limit()))
    }

    pub(crate) fn append_to(&self, query: &mut Query) {
        query.push("limit", self.limit()).push("offset", self.offset());
    }
}

/// Filters for `MatchesClient::search_matches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSearch {
    pub player_id: Option<u64>,
    pub club_id: Option<u64>,
    pub event_id: Option<u64>,
    pub page: Page,
}

impl MatchSearch {
    pub fn for_player(player_id: u64) -> Self {
        Self {
            player_id: Some(player_id),
            ..Self::default()
        }
    }

    pub fn for_club(club_id: u64) -> Self {
        Self {
            club_id: Some(club_id),
            ..Self::default()
        }
    }

    pub fn for_event(event_id: u64) -> Self {
        Self {
            event_id: Some(event_id),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("playerId", self.player_id)
            .push_opt("clubId", self.club_id)
            .push_opt("eventId", self.event_id);
        self.page.append_to(&mut query);
        query
    }
}

/// Free-text search used for players, clubs and events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    pub query: Option<String>,
    pub page: Page,
}

impl TextSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            page: Page::default(),
        }
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.push_opt("query", self.query.as_deref());
        self.page.append_to(&mut query);
        query
    }
}

/// Which rating a history lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingType {
    Singles,
    Doubles,
}

impl RatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingType::Singles => "SINGLES",
            RatingType::Doubles => "DOUBLES",
        }
    }
}

/// Lifecycle state of a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BracketStatus {
    Active,
    Inactive,
    InProgress,
    Complete,
    Cancelled,
}
