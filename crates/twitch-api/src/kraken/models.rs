use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RequestOptions;

// --- Users & channels ---

/// A user as returned by `/user` and `/users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub bio: String,
    pub logo: String,
    pub email: String,
    pub email_verified: bool,
    pub partnered: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub status: String,
    pub game: String,
    pub description: String,
    pub broadcaster_language: String,
    pub broadcaster_type: String,
    pub language: String,
    pub logo: String,
    pub url: String,
    pub mature: bool,
    pub partner: bool,
    pub followers: u64,
    pub views: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One channel a user follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Follow {
    pub created_at: Option<DateTime<Utc>>,
    pub notifications: bool,
    pub channel: Channel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFollows {
    #[serde(rename = "_total")]
    pub total: u64,
    pub follows: Vec<Follow>,
}

/// One user following a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelFollower {
    pub created_at: Option<DateTime<Utc>>,
    pub notifications: bool,
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelFollowers {
    #[serde(rename = "_total")]
    pub total: u64,
    #[serde(rename = "_cursor")]
    pub cursor: String,
    pub follows: Vec<ChannelFollower>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    pub large: String,
    pub medium: String,
    pub small: String,
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub broadcast_id: u64,
    pub broadcast_type: String,
    pub channel: Channel,
    pub title: String,
    pub description: String,
    pub game: String,
    pub language: String,
    pub length: u64,
    pub preview: Preview,
    pub url: String,
    pub viewable: String,
    pub views: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoList {
    #[serde(rename = "_total")]
    pub total: u64,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSort {
    Views,
    Time,
}

impl VideoSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Time => "time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for `GET /channels/{id}/follows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowersQuery {
    pub limit: u64,
    pub offset: u64,
    pub cursor: String,
    pub direction: Option<Direction>,
}

impl FollowersQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        let options = RequestOptions::new()
            .param_nonzero("limit", self.limit)
            .param_nonzero("offset", self.offset)
            .param_nonempty("cursor", &self.cursor);
        match self.direction {
            Some(direction) => options.param("direction", direction.as_str()),
            None => options,
        }
    }
}

/// Filters for `GET /channels/{id}/videos`.
///
/// `broadcast_type` takes any of `archive`, `highlight` and `upload`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelVideosQuery {
    pub limit: u64,
    pub offset: u64,
    pub broadcast_type: Vec<String>,
    pub language: Vec<String>,
    pub sort: Option<VideoSort>,
}

impl ChannelVideosQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        let options = RequestOptions::new()
            .param_nonzero("limit", self.limit)
            .param_nonzero("offset", self.offset)
            .param_nonempty("broadcast_type", &self.broadcast_type.join(","))
            .param_nonempty("language", &self.language.join(","));
        match self.sort {
            Some(sort) => options.param("sort", sort.as_str()),
            None => options,
        }
    }
}

/// Form body for `PUT /channels/{id}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_feed_enabled: Option<bool>,
}

// --- Streams ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Live,
    Playlist,
    All,
}

impl StreamType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Playlist => "playlist",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    #[serde(rename = "_id")]
    pub id: u64,
    pub game: String,
    pub viewers: u64,
    pub video_height: u32,
    pub average_fps: f64,
    pub delay: u32,
    pub is_playlist: bool,
    pub stream_type: String,
    pub channel: Channel,
    pub preview: Preview,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamList {
    #[serde(rename = "_total")]
    pub total: u64,
    pub streams: Vec<Stream>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamSummary {
    pub channels: u64,
    pub viewers: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedStream {
    pub image: String,
    pub priority: i64,
    pub scheduled: bool,
    pub sponsored: bool,
    pub text: String,
    pub title: String,
    pub stream: Stream,
}

/// Featured streams. `total` counts the entries in this response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedStreams {
    #[serde(skip_deserializing)]
    pub total: u64,
    pub featured: Vec<FeaturedStream>,
}

/// Filters for `GET /streams`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveStreamsQuery {
    pub channel: Vec<u64>,
    pub game: String,
    pub language: String,
    pub stream_type: Option<StreamType>,
    pub limit: u64,
    pub offset: u64,
}

impl LiveStreamsQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        let channels = self
            .channel
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        RequestOptions::new()
            .param_nonempty("channel", &channels)
            .param_nonempty("game", &self.game)
            .param_nonempty("language", &self.language)
            .param_nonempty("stream_type", self.stream_type.map_or("", StreamType::as_str))
            .param_nonzero("limit", self.limit)
            .param_nonzero("offset", self.offset)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamSummaryQuery {
    pub game: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedStreamsQuery {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowedStreamsQuery {
    pub stream_type: Option<StreamType>,
    pub limit: u64,
    pub offset: u64,
}

impl FollowedStreamsQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .param_nonempty("stream_type", self.stream_type.map_or("", StreamType::as_str))
            .param_nonzero("limit", self.limit)
            .param_nonzero("offset", self.offset)
    }
}

// --- Clips ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Broadcaster {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub channel_url: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Curator {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub channel_url: String,
    pub logo: String,
}

/// Source video of a clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vod {
    pub id: u64,
    pub url: String,
    pub offset: u64,
    pub preview_image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub medium: String,
    pub small: String,
    pub tiny: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clip {
    pub slug: String,
    pub tracking_id: String,
    pub url: String,
    pub embed_url: String,
    pub embed_html: String,
    pub broadcaster: Broadcaster,
    pub curator: Curator,
    pub vod: Option<Vod>,
    pub broadcast_id: String,
    pub game: String,
    pub language: String,
    pub title: String,
    pub views: u64,
    pub duration: f64,
    pub thumbnails: Thumbnails,
    pub created_at: Option<DateTime<Utc>>,
}

/// A page of clips. Resubmit `cursor` to fetch the next page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipList {
    pub clips: Vec<Clip>,
    #[serde(rename = "_cursor")]
    pub cursor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipPeriod {
    Day,
    Week,
    Month,
    All,
}

impl ClipPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

/// Filters for `GET /clips/top`. When both `channel` and `game` are set the
/// server ignores `game`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopClipsQuery {
    pub channel: String,
    pub game: String,
    /// Comma-joined language codes, e.g. `en,es`.
    pub language: String,
    pub cursor: String,
    pub limit: u64,
    pub period: Option<ClipPeriod>,
    pub trending: bool,
}

impl TopClipsQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .param_nonempty("channel", &self.channel)
            .param_nonempty("cursor", &self.cursor)
            .param_nonempty("game", &self.game)
            .param_nonempty("language", &self.language)
            .param_nonzero("limit", self.limit)
            .param_nonempty("period", self.period.map_or("", ClipPeriod::as_str))
            .param_flag("trending", self.trending)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowedClipsQuery {
    pub game: String,
    /// Comma-joined language codes, e.g. `en,es`.
    pub language: String,
    pub cursor: String,
    pub limit: u64,
    pub period: Option<ClipPeriod>,
    pub trending: bool,
}

impl FollowedClipsQuery {
    pub(crate) fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .param_nonempty("cursor", &self.cursor)
            .param_nonempty("game", &self.game)
            .param_nonempty("language", &self.language)
            .param_nonzero("limit", self.limit)
            .param_nonempty("period", self.period.map_or("", ClipPeriod::as_str))
            .param_flag("trending", self.trending)
    }
}

// --- Ingests ---

/// An ingest server that receives broadcast streams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingest {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub default: bool,
    pub availability: f64,
    pub url_template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestList {
    pub ingests: Vec<Ingest>,
}
