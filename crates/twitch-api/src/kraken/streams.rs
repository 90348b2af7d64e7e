use serde::Deserialize;

use super::*;

/// `/streams/{id}` wraps the stream in an object whose value is `null` while
/// the channel is offline.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StreamEnvelope {
    stream: Option<Stream>,
}

impl Kraken {
    /// Get the live stream of a channel. `Ok(None)` means the channel is offline.
    pub async fn get_stream(
        &self,
        channel_id: u64,
        stream_type: Option<StreamType>,
    ) -> Result<Option<Stream>, TwitchError> {
        let channel_id = require_id(channel_id, "get_stream", "channel_id")?;
        let options = RequestOptions::new()
            .param_nonempty("stream_type", stream_type.map_or("", StreamType::as_str));
        let envelope: StreamEnvelope = self
            .client
            .get_json(&format!("streams/{channel_id}"), options)
            .await?;

        tracing::debug!(channel_id, live = envelope.stream.is_some(), "Fetched stream");
        Ok(envelope.stream)
    }

    pub async fn get_live_streams(
        &self,
        query: &LiveStreamsQuery,
    ) -> Result<StreamList, TwitchError> {
        let streams: StreamList = self.client.get_json("streams", query.to_options()).await?;
        tracing::debug!(
            count = streams.streams.len(),
            total = streams.total,
            "Fetched live streams"
        );
        Ok(streams)
    }

    /// Get channel and viewer totals, optionally for one game.
    pub async fn get_stream_summary(
        &self,
        query: &StreamSummaryQuery,
    ) -> Result<StreamSummary, TwitchError> {
        let options = RequestOptions::new().param_nonempty("game", &query.game);
        self.client.get_json("streams/summary", options).await
    }

    pub async fn get_featured_streams(
        &self,
        query: &FeaturedStreamsQuery,
    ) -> Result<FeaturedStreams, TwitchError> {
        let options = RequestOptions::new()
            .param_nonzero("limit", query.limit)
            .param_nonzero("offset", query.offset);
        let mut featured: FeaturedStreams =
            self.client.get_json("streams/featured", options).await?;
        featured.total = featured.featured.len() as u64;

        tracing::debug!(count = featured.total, "Fetched featured streams");
        Ok(featured)
    }

    /// Get live streams of channels the token's user follows.
    /// Requires the `user_read` scope.
    pub async fn get_followed_streams(
        &self,
        query: &FollowedStreamsQuery,
    ) -> Result<StreamList, TwitchError> {
        let streams: StreamList = self
            .client
            .get_json("streams/followed", query.to_options())
            .await?;
        tracing::debug!(
            count = streams.streams.len(),
            total = streams.total,
            "Fetched followed streams"
        );
        Ok(streams)
    }
}
