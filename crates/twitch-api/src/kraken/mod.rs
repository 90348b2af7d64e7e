//! Legacy v5 ("Kraken") API.
//!
//! Requests carry `Authorization: OAuth <token>` and the v5 `Accept` header.
//! Comma-joined query values are sent as repeated keys.

mod channels;
mod clips;
mod ingests;
mod streams;
mod users;

pub mod models;


pub use models::{
    Broadcaster, Channel, ChannelFollower, ChannelFollowers, ChannelVideosQuery, Clip, ClipList,
    ClipPeriod, Curator, Direction, FeaturedStream, FeaturedStreams, FeaturedStreamsQuery,
    Follow, FollowedClipsQuery, FollowedStreamsQuery, FollowersQuery, Ingest, IngestList,
    LiveStreamsQuery, Preview, Stream, StreamList, StreamSummary, StreamSummaryQuery, StreamType,
    Thumbnails, TopClipsQuery, UpdateChannel, User, UserFollows, Video, VideoList, VideoSort, Vod,
};

use crate::{Client, Config, Dialect, RequestOptions, TwitchError};

/// Kraken resource client.
#[derive(Debug, Clone)]
pub struct Kraken {
    client: Client,
}

impl Kraken {
    pub fn new(config: Config) -> Result<Self, TwitchError> {
        Ok(Self {
            client: Client::new(config, Dialect::Kraken)?,
        })
    }

    /// Underlying client, for endpoints without a typed wrapper.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn require_id(id: u64, operation: &'static str, field: &'static str) -> Result<u64, TwitchError> {
    if id == 0 {
        return Err(TwitchError::InvalidInput { operation, field });
    }
    Ok(id)
}
