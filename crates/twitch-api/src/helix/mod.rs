//! Helix API.
//!
//! Provides typed access to games, users and streams with
//! `Authorization: Bearer <token>` and Client-ID header injection.

mod games;
mod streams;
mod users;

pub mod models;


pub use models::{
    Game, GamesQuery, HelixPaginatedResponse, HelixPagination, HelixResponse, MAX_PAGE_SIZE, Page,
    Stream, StreamsQuery, User, UsersQuery,
};

use crate::{Client, Config, Dialect, TwitchError};

/// Helix resource client.
#[derive(Debug, Clone)]
pub struct Helix {
    client: Client,
}

impl Helix {
    pub fn new(config: Config) -> Result<Self, TwitchError> {
        Ok(Self {
            client: Client::new(config, Dialect::Helix)?,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
