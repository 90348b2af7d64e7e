use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RequestOptions;

/// Largest page size Helix accepts for `first`.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Wrapper for Twitch Helix list responses.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HelixPagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HelixPaginatedResponse<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<HelixPagination>,
}

/// One page of results plus the cursor for the next one.
///
/// The cursor is never followed automatically; pass it back as `after`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub cursor: Option<String>,
}

impl<T> From<HelixPaginatedResponse<T>> for Page<T> {
    fn from(resp: HelixPaginatedResponse<T>) -> Self {
        Self {
            data: resp.data,
            cursor: resp
                .pagination
                .and_then(|p| p.cursor)
                .filter(|c| !c.is_empty()),
        }
    }
}

/// Game (category) from GET /helix/games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
}

/// User information from GET /helix/users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    pub view_count: u64,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Stream information from GET /helix/streams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    pub game_id: String,
    pub game_name: String,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: Option<DateTime<Utc>>,
    pub language: String,
    pub thumbnail_url: String,
    pub tag_ids: Vec<String>,
    pub is_mature: bool,
}

/// Lookup for GET /helix/games. At least one name or ID is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesQuery {
    pub names: Vec<String>,
    pub ids: Vec<u64>,
}

impl GamesQuery {
    /// True when no usable name or ID is set. Blank names and zero IDs count
    /// as absent.
    pub fn is_empty(&self) -> bool {
        self.names.iter().all(|n| n.trim().is_empty()) && self.ids.iter().all(|id| *id == 0)
    }

    pub(crate) fn to_options(&self) -> RequestOptions {
        let options = self
            .names
            .iter()
            .filter(|name| !name.trim().is_empty())
            .fold(RequestOptions::new(), |o, name| o.param("name", name.as_str()));
        self.ids
            .iter()
            .fold(options, |o, id| o.param_nonzero("id", *id))
    }
}

/// Lookup for GET /helix/users. An empty query returns the token's user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersQuery {
    pub ids: Vec<String>,
    pub logins: Vec<String>,
}

impl UsersQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        let options = self
            .ids
            .iter()
            .fold(RequestOptions::new(), |o, id| o.param("id", id.as_str()));
        self.logins
            .iter()
            .fold(options, |o, login| o.param("login", login.as_str()))
    }
}

/// Filters for GET /helix/streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamsQuery {
    pub user_ids: Vec<String>,
    pub user_logins: Vec<String>,
    pub game_ids: Vec<String>,
    pub languages: Vec<String>,
    /// Page size; values above [`MAX_PAGE_SIZE`] are clamped.
    pub first: u64,
    pub after: String,
    pub before: String,
}

impl StreamsQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        let repeated = [
            ("user_id", &self.user_ids),
            ("user_login", &self.user_logins),
            ("game_id", &self.game_ids),
            ("language", &self.languages),
        ];
        let mut options = RequestOptions::new();
        for (key, values) in repeated {
            for value in values {
                options = options.param(key, value.as_str());
            }
        }
        options
            .param_nonzero("first", self.first.min(MAX_PAGE_SIZE))
            .param_nonempty("after", &self.after)
            .param_nonempty("before", &self.before)
    }
}
